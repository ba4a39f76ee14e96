pub mod header;

pub use header::Navbar;
