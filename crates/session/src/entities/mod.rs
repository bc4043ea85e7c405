//! Domain entities held in the client session.

pub mod draft;
pub mod household;
pub mod inventory;
pub mod preferences;
pub mod product;
pub mod task;
pub mod user;

pub use draft::{Draft, DraftRecord};
pub use household::Household;
pub use inventory::{Inventory, InventoryKind};
pub use preferences::{Preferences, PreferencesPatch, Theme};
pub use product::Product;
pub use task::{Recurrence, Task};
pub use user::{User, UserPatch, UserStatus};
