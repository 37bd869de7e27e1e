pub mod collection;

use stealemoji_database::Database;

pub use collection::CollectionSwitch;

pub type Error = anyhow::Error;

#[derive(Clone, Debug)]
pub struct Data {
    pub db: Database,
    pub collection: CollectionSwitch,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
