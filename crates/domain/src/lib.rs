pub mod console;
pub mod error;
pub mod product;
pub mod user;

pub use console::{Console, Stdout, Transcript};
pub use error::DomainError;
pub use product::Product;
pub use user::User;
