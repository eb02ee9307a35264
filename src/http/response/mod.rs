mod state;

pub use state::AsyncFrom;
pub use state::Json;
pub use state::Raw;
pub use state::Response;
