//! Sparse update patches over a fixed column allowlist.
//!
//! A [`Patch`] holds the `(column, value)` pairs a caller actually supplied
//! for a partial update. Columns are enum values implementing
//! [`PatchColumn`], so only allowlisted names can ever reach a `SET` clause;
//! values are always bound as parameters by the database layer.

use crate::error::CoreError;

/// A column that may be assigned by a partial update.
pub trait PatchColumn: Copy + Eq + std::fmt::Debug + 'static {
    /// Table the column belongs to.
    const TABLE: &'static str;

    /// Column name as it appears in SQL.
    fn column_name(self) -> &'static str;

    /// Map a text request field onto its column, if the field is allowlisted.
    fn from_text_field(field: &str) -> Option<Self>;

    /// Map an uploaded-file request field onto the column holding its URL.
    fn from_file_field(field: &str) -> Option<Self>;
}

/// Ordered set of column assignments for one `UPDATE` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch<C> {
    entries: Vec<(C, String)>,
}

impl<C> Default for Patch<C> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<C: PatchColumn> Patch<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `value` to `column`. Assigning a column twice keeps the last
    /// value in the position of the first assignment.
    ///
    /// An empty string is a real value: it clears the column to `''`.
    pub fn set(&mut self, column: C, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(c, _)| *c == column) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((column, value)),
        }
    }

    /// Assign `value` only when it is present.
    pub fn set_opt(&mut self, column: C, value: Option<String>) {
        if let Some(v) = value {
            self.set(column, v);
        }
    }

    pub fn get(&self, column: C) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (C, &str)> + '_ {
        self.entries.iter().map(|(c, v)| (*c, v.as_str()))
    }

    /// Column names in assignment order.
    pub fn column_names(&self) -> Vec<&'static str> {
        self.entries.iter().map(|(c, _)| c.column_name()).collect()
    }

    /// Reject an empty patch with a validation error.
    pub fn require_changes(self, message: &str) -> Result<Self, CoreError> {
        if self.is_empty() {
            Err(CoreError::Validation(message.to_string()))
        } else {
            Ok(self)
        }
    }
}

// ---------------------------------------------------------------------------
// Allowlists
// ---------------------------------------------------------------------------

/// Updatable columns of `products`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductColumn {
    Name,
    MainImageUrl,
}

impl PatchColumn for ProductColumn {
    const TABLE: &'static str = "products";

    fn column_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::MainImageUrl => "main_image_url",
        }
    }

    fn from_text_field(field: &str) -> Option<Self> {
        match field {
            "name" => Some(Self::Name),
            _ => None,
        }
    }

    fn from_file_field(field: &str) -> Option<Self> {
        match field {
            "main_image" => Some(Self::MainImageUrl),
            _ => None,
        }
    }
}

/// Updatable columns of `brief_description`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BriefDescriptionColumn {
    Title,
    Body,
    SubOne,
    SubTwo,
    MainImage,
    SubImageOne,
    SubImageTwo,
}

impl BriefDescriptionColumn {
    /// Text columns, in table order.
    pub const TEXT: [Self; 4] = [Self::Title, Self::Body, Self::SubOne, Self::SubTwo];

    /// Image columns, in table order. Each is also the upload field name.
    pub const IMAGES: [Self; 3] = [Self::MainImage, Self::SubImageOne, Self::SubImageTwo];
}

impl PatchColumn for BriefDescriptionColumn {
    const TABLE: &'static str = "brief_description";

    fn column_name(self) -> &'static str {
        match self {
            Self::Title => "brief_description_title",
            Self::Body => "brief_description",
            Self::SubOne => "sub_brief_description_one",
            Self::SubTwo => "sub_brief_description_two",
            Self::MainImage => "desc_main_image",
            Self::SubImageOne => "desc_sub_image_one",
            Self::SubImageTwo => "desc_sub_image_two",
        }
    }

    fn from_text_field(field: &str) -> Option<Self> {
        Self::TEXT.into_iter().find(|c| c.column_name() == field)
    }

    fn from_file_field(field: &str) -> Option<Self> {
        Self::IMAGES.into_iter().find(|c| c.column_name() == field)
    }
}
