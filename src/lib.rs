pub mod di;
pub mod entity;
pub mod ethplorer;
pub mod interactor;
pub mod presenter;
pub mod router;
pub mod settings;
pub mod utils;
pub mod view;

// Re-export commonly used items
pub use di::*;
pub use entity::*;
pub use ethplorer::*;
pub use interactor::*;
pub use presenter::*;
pub use router::*;
pub use settings::*;
pub use utils::*;
pub use view::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
