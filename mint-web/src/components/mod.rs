//! UI Components

pub mod main_mint;
pub mod navbar;

pub use main_mint::MainMint;
pub use navbar::NavBar;
