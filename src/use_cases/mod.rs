// Use cases layer: content resolution, the registration proxy, and the page hand-off.

pub mod bootstrap;
pub mod content;
pub mod handoff;
pub mod page_view;
pub mod registration;

#[cfg(test)]
pub(crate) mod test_support;

pub use bootstrap::SessionBootstrapper;
pub use content::{ContentCache, ContentOrigin, ContentProvider, ResolvedContent};
pub use handoff::{FlowState, LandingSession, RegistrationForm, SubmitOutcome};
pub use page_view::PageView;
pub use registration::SubmitRegistrationUseCase;
