pub mod fetch;
pub mod state;

pub use fetch::{CollectionFetcher, FetchOutcome, FetchTicket, FetchTracker, ScreenData};
pub use state::{ListControllerError, ListControllerState};
