use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::github::RequestDescriptor;

/// GitHub's default page size
pub const DEFAULT_PER_PAGE: u32 = 30;

pub const DEFAULT_PAGE: u32 = 1;

/// Page-based pagination forwarded verbatim as `per_page`/`page` query parameters.
///
/// Values are not range-checked; GitHub decides what to do with out-of-range input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Pagination {
    pub per_page: u32,
    pub page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            page: DEFAULT_PAGE,
        }
    }
}

impl Pagination {
    pub fn new(per_page: Option<u32>, page: Option<u32>) -> Self {
        Self {
            per_page: per_page.unwrap_or(DEFAULT_PER_PAGE),
            page: page.unwrap_or(DEFAULT_PAGE),
        }
    }

    pub fn apply(&self, descriptor: RequestDescriptor) -> RequestDescriptor {
        descriptor
            .with_query("per_page", self.per_page)
            .with_query("page", self.page)
    }
}
