//! Identifier case conversion and table-name pluralization.
//!
//! Entity and field names are declared in the host language's style
//! (`UserProfile`, `first_name`). Derived table and column names are
//! produced by converting those names to a target [`Casing`] and, for
//! tables, applying a [`Pluralize`] rule.

use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};

/// Converts an identifier to `snake_case`.
///
/// Words are split at uppercase-letter boundaries, lowercased, and joined
/// with `_`: `FirstName` becomes `first_name`. Identifiers without an
/// uppercase letter come back unchanged (`firstname`, `first_name`,
/// `_internal`, `order__total`).
pub fn to_snake_case(ident: &str) -> String {
    if !ident.bytes().any(|b| b.is_ascii_uppercase()) {
        return ident.to_owned();
    }

    ident.to_snake_case()
}

/// Target naming convention for derived names.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Casing {
    /// Keep the declared name as written.
    Preserve,

    /// `user_profile`
    #[default]
    Snake,

    /// `user-profile`
    Kebab,

    /// `userProfile`
    Camel,

    /// `UserProfile`
    Pascal,

    /// `USER_PROFILE`
    ScreamingSnake,
}

impl Casing {
    /// Returns [`Casing::Snake`] when `snake` is true, else [`Casing::Preserve`].
    pub fn snake_if(snake: bool) -> Casing {
        if snake {
            Casing::Snake
        } else {
            Casing::Preserve
        }
    }

    pub fn apply(self, ident: &str) -> String {
        match self {
            Casing::Preserve => ident.to_owned(),
            Casing::Snake => to_snake_case(ident),
            Casing::Kebab => ident.to_kebab_case(),
            Casing::Camel => ident.to_lower_camel_case(),
            Casing::Pascal => ident.to_upper_camel_case(),
            Casing::ScreamingSnake => ident.to_shouty_snake_case(),
        }
    }
}

/// Rule used to turn an entity type name into a plural table name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pluralize {
    /// Append `s` to the cased name (`S` for screaming snake case).
    /// `Category` becomes `categorys`.
    ///
    /// This is the historical rule; existing tables are named this way.
    #[default]
    Naive,

    /// Inflect the last word with English plural rules. `Category` becomes
    /// `categories`, `Person` becomes `people`.
    Inflect,
}

impl Pluralize {
    /// Derives a table name from an entity type name.
    pub fn table_name(self, type_name: &str, casing: Casing) -> String {
        match self {
            Pluralize::Naive => {
                let mut name = casing.apply(type_name);
                name.push(match casing {
                    Casing::ScreamingSnake => 'S',
                    _ => 's',
                });
                name
            }
            Pluralize::Inflect => casing.apply(&inflect_last_word(type_name)),
        }
    }
}

/// Pluralizes the final word of an identifier, keeping the rest as is.
fn inflect_last_word(ident: &str) -> String {
    let start = ident
        .char_indices()
        .rev()
        .find_map(|(i, c)| {
            if c == '_' || c == '-' {
                Some(i + c.len_utf8())
            } else if c.is_uppercase() {
                Some(i)
            } else {
                None
            }
        })
        .unwrap_or(0);

    let (head, last) = ident.split_at(start);

    if last.is_empty() {
        return ident.to_owned();
    }

    format!("{head}{}", pluralizer::pluralize(last, 2, false))
}
