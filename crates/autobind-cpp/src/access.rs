//! Access-region tracking inside a class body

/// What a class body child means for access tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyItem {
    /// `public`, `protected` or `private`
    AccessSpecifier { public: bool },
    /// Comment equal to the suppression marker
    SuppressionMarker,
    /// Field declaration, inline definition or constructor/destructor declaration
    Declaration,
    /// Anything else (braces, other comments, nested types, ...)
    Other,
}

/// What the extractor should do with the current child
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Ignore,
    /// Drop this declaration without looking at it
    Suppress,
    /// Inspect this declaration for a bindable method
    Inspect,
}

/// Visibility of the current access region plus the one-shot suppression.
///
/// Every class body starts in [`AccessState::Private`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessState {
    #[default]
    Private,
    Public,
    /// Public, and the next declaration is suppressed
    PublicSkipNext,
}

impl AccessState {
    /// Advance over one class body child
    pub fn step(self, item: BodyItem) -> (AccessState, Action) {
        use AccessState::*;

        match (self, item) {
            (_, BodyItem::AccessSpecifier { public: true }) => (Public, Action::Ignore),
            (_, BodyItem::AccessSpecifier { public: false }) => (Private, Action::Ignore),
            (Private, _) => (Private, Action::Ignore),
            (Public | PublicSkipNext, BodyItem::SuppressionMarker) => {
                (PublicSkipNext, Action::Ignore)
            }
            (Public, BodyItem::Declaration) => (Public, Action::Inspect),
            (PublicSkipNext, BodyItem::Declaration) => (Public, Action::Suppress),
            (state, BodyItem::Other) => (state, Action::Ignore),
        }
    }
}
