use serde::{Deserialize, Serialize};

/// Standard envelope for paginated list endpoints.
///
/// The server echoes the paging it actually applied, so the client renders
/// `page`/`total_pages` from the response rather than its own request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> PaginatedResponse<T> {
    pub fn empty(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            page_size,
            total_pages: 0,
        }
    }
}

/// Number of pages needed for `total` items at `page_size` per page.
pub fn total_pages(total: usize, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    ((total as u64).div_ceil(page_size as u64)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 12), 0);
        assert_eq!(total_pages(1, 12), 1);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(120, 12), 10);
    }

    #[test]
    fn test_total_pages_zero_page_size() {
        assert_eq!(total_pages(50, 0), 0);
    }

    #[test]
    fn test_envelope_shape() {
        let resp: PaginatedResponse<String> = serde_json::from_str(
            r#"{"items":["a"],"total":1,"page":1,"pageSize":12,"totalPages":1}"#,
        )
        .unwrap();
        assert_eq!(resp.items, vec!["a".to_string()]);
        assert_eq!(resp.page_size, 12);
    }
}
