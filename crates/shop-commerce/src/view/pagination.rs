//! Pagination controls.

use crate::search::Pagination;

/// Render previous/next buttons around one button per page. Previous is
/// disabled on the first page and next on the last.
pub fn render_pagination(pagination: &Pagination) -> String {
    let prev = format!(
        r#"<button type="button" class="page-btn" data-page="{}"{}>&lt;</button>"#,
        pagination.page.saturating_sub(1).max(1),
        if pagination.has_prev { "" } else { " disabled" },
    );
    let pages: String = pagination
        .page_numbers()
        .map(|page| {
            format!(
                r#"<button type="button" class="page-btn{}" data-page="{page}">{page}</button>"#,
                if page == pagination.page { " active" } else { "" },
            )
        })
        .collect();
    let next = format!(
        r#"<button type="button" class="page-btn" data-page="{}"{}>&gt;</button>"#,
        (pagination.page + 1).min(pagination.total_pages),
        if pagination.has_next { "" } else { " disabled" },
    );

    format!(r#"<div class="pagination">{prev}{pages}{next}</div>"#)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_of_two_pages() {
        let html = render_pagination(&Pagination::new(1, 10, 14));
        assert_eq!(
            html,
            concat!(
                r#"<div class="pagination">"#,
                r#"<button type="button" class="page-btn" data-page="1" disabled>&lt;</button>"#,
                r#"<button type="button" class="page-btn active" data-page="1">1</button>"#,
                r#"<button type="button" class="page-btn" data-page="2">2</button>"#,
                r#"<button type="button" class="page-btn" data-page="2">&gt;</button>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_last_page_disables_next() {
        let html = render_pagination(&Pagination::new(2, 10, 14));
        assert!(html.ends_with(r#"data-page="2" disabled>&gt;</button></div>"#));
        assert!(html.contains(r#"class="page-btn active" data-page="2""#));
    }
}
