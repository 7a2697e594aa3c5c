//! Logos directive table.

/// Where a directive is allowed to appear in a Logos file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveScope {
    Block,
    TopLevel,
    Function,
}

/// A Logos directive recognized by the preprocessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Hook,
    End,
    New,
    Group,
    Subclass,
    Property,
    Config,
    Hookf,
    Ctor,
    Dtor,
    Init,
    C,
    Orig,
    Log,
}

impl Directive {
    pub const ALL: [Directive; 14] = [
        Self::Hook,
        Self::End,
        Self::New,
        Self::Group,
        Self::Subclass,
        Self::Property,
        Self::Config,
        Self::Hookf,
        Self::Ctor,
        Self::Dtor,
        Self::Init,
        Self::C,
        Self::Orig,
        Self::Log,
    ];

    /// The directive name without the leading `%`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hook => "hook",
            Self::End => "end",
            Self::New => "new",
            Self::Group => "group",
            Self::Subclass => "subclass",
            Self::Property => "property",
            Self::Config => "config",
            Self::Hookf => "hookf",
            Self::Ctor => "ctor",
            Self::Dtor => "dtor",
            Self::Init => "init",
            Self::C => "c",
            Self::Orig => "orig",
            Self::Log => "log",
        }
    }

    /// Look up a directive by name (without `%`).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.name() == name)
    }

    pub fn scope(&self) -> DirectiveScope {
        match self {
            Self::Hook | Self::End | Self::New | Self::Group | Self::Subclass | Self::Property => {
                DirectiveScope::Block
            }
            Self::Config | Self::Hookf | Self::Ctor | Self::Dtor => DirectiveScope::TopLevel,
            Self::Init | Self::C | Self::Orig | Self::Log => DirectiveScope::Function,
        }
    }

    /// Whether the masked line needs a `;` so the formatter sees a statement.
    ///
    /// `%property` is a block directive but already ends in `;`.
    pub fn needs_terminator(&self) -> bool {
        matches!(
            self,
            Self::Hook | Self::End | Self::New | Self::Group | Self::Subclass
        )
    }

    /// Whether this directive opens a block closed by `%end`.
    pub fn opens_block(&self) -> bool {
        matches!(self, Self::Hook | Self::Group | Self::Subclass)
    }
}

impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "%{}", self.name())
    }
}
