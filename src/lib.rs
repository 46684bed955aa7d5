pub mod config;
pub mod deadline;
pub mod filter;
pub mod listing;
pub mod output;
pub mod records;
pub mod region;
pub mod source;

pub use filter::{FilterController, QueryState, RegionFilter};
pub use listing::{Listing, Transformer, transform};
pub use records::{EnrichedRecord, RawRecord};
pub use region::{Continent, CountryInfo, RegionResolver};
pub use source::DataSource;
