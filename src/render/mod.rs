//! Result presentation layer
//!
//! Decides how a chat answer should be displayed. Given a query's
//! lifecycle state (loading, failed, completed) and its mode tag, the
//! resolver picks exactly one renderer and the auxiliary indicators
//! (timing, authorization notice, summary, table/chart toggle) that go
//! with it. The resolver performs no I/O and never mutates its inputs.

pub mod data;
pub mod resolver;
pub mod state;

pub use data::{ContentKind, QueryAuthorization, QueryMode, QueryResult};
pub use resolver::{
    resolve, ExecuteInput, ExecuteView, HeaderBar, QueryKind, QueryPhase, RenderDecision,
    ResolveError, StructuredView, WebPageView,
};
pub use state::DisplayState;
