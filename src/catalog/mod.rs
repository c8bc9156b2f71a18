mod load;
mod record;

pub use load::{CatalogSource, load_catalog};
pub use record::{Catalog, Icon, ServiceRecord};
