pub mod games;
pub mod throws;

pub use games::Entity as Games;
pub use throws::Entity as Throws;
