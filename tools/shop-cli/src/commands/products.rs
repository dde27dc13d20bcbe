//! Catalog browsing commands.

use anyhow::Result;
use shop_commerce::catalog::{display_name, Catalog, Product};
use shop_commerce::search::ProductQuery;
use shop_commerce::{view, CommerceError, Notification, ProductId};

use super::{CategoriesArgs, ProductArgs, ProductsArgs};
use crate::context::Context;

/// Run the products command.
pub fn list(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let mut query = ProductQuery::new()
        .with_category(args.category)
        .with_page(args.page)
        .with_per_page(ctx.config.shop.page_size);
    if let Some(search) = args.search {
        query = query.with_search(search);
    }

    let listing = query.run(&catalog);
    let page = listing.page();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "query": query,
            "total": listing.total(),
            "products": page.items,
            "pagination": page.pagination,
        }));
        return Ok(());
    }

    if ctx.output.is_html() {
        if query.search_text().is_some() {
            ctx.output.html(&view::render_search_results(listing.products()));
        } else {
            ctx.output.html(&view::render_product_grid(page.items));
            ctx.output.html(&view::render_pagination(&page.pagination));
        }
        return Ok(());
    }

    let heading = match query.search_text() {
        Some(text) => format!("Results for \"{}\" ({})", text, listing.total()),
        None => format!("{} ({})", display_name(&query.category), listing.total()),
    };
    ctx.output.header(&heading);

    if page.is_empty() {
        ctx.output.info(view::NO_RESULTS_MESSAGE);
        return Ok(());
    }

    for product in page.items {
        print_product_row(ctx, product);
    }

    let pagination = page.pagination;
    if pagination.total_pages > 1 {
        ctx.output.info(&format!(
            "Page {} of {}",
            pagination.page, pagination.total_pages
        ));
    }

    Ok(())
}

/// Run the product command.
pub fn show(args: ProductArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let id = ProductId::new(args.id);

    let Some(product) = catalog.find_product_by_id(id) else {
        if !ctx.output.is_json() {
            ctx.output.notification(&Notification::product_not_found());
        }
        return Err(CommerceError::ProductNotFound(id).into());
    };
    let similar = catalog.similar_products(id);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "product": product,
            "similar": similar,
        }));
        return Ok(());
    }

    if ctx.output.is_html() {
        ctx.output.html(&view::render_product_detail(product, &similar));
        return Ok(());
    }

    ctx.output.header(&product.name);
    ctx.output.kv("Price", &product.price.to_string());
    ctx.output.kv("Category", &display_name(&product.category));
    ctx.output.kv("Rating", &product.rating_line());
    if let Some(description) = &product.description {
        ctx.output.kv("Description", description);
    }

    if !similar.is_empty() {
        ctx.output.header("Similar items");
        for item in similar {
            print_product_row(ctx, item);
        }
    }

    Ok(())
}

/// Run the categories command.
pub fn categories(args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let counts = catalog.category_counts();

    if ctx.output.is_json() {
        ctx.output.json(&counts);
        return Ok(());
    }

    if ctx.output.is_html() {
        ctx.output.html(&view::render_category_list(&counts, &args.active));
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in &counts {
        let marker = if category.slug == args.active { "*" } else { " " };
        ctx.output.table_row(
            &[marker, &category.slug, &category.name, &category.count.to_string()],
            &[1, 14, 14, 4],
        );
    }

    Ok(())
}

fn print_product_row(ctx: &Context, product: &Product) {
    ctx.output.table_row(
        &[
            &product.id.to_string(),
            &product.name,
            &product.price.to_string(),
            &product.category,
        ],
        &[4, 28, 12, 12],
    );
}
