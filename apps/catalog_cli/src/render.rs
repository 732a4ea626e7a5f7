use std::fmt::Write as _;

use catalog_core::{FetchStatus, ViewState};
use shared::domain::Item;

const TITLE_WIDTH: usize = 48;

pub fn render_view(view: &ViewState) -> String {
    let mut out = String::new();

    if let FetchStatus::Failed { message } = &view.fetch {
        let _ = writeln!(out, "! failed to load page {}: {message}", u64::from(view.page) + 1);
        let _ = writeln!(out, "  type 'retry' to try again");
        let _ = writeln!(out, "{}", render_totals(view));
        return out;
    }

    let status = if view.fetch.is_loading() {
        " (loading...)"
    } else {
        ""
    };
    let _ = writeln!(
        out,
        "page {} | {} per page | sort {} | search {:?}{status}",
        u64::from(view.page) + 1,
        view.page_size,
        view.sort_order.as_str(),
        view.search_term,
    );
    let _ = writeln!(out, "{}", render_totals(view));

    if let Some(item) = &view.selected_item {
        let _ = writeln!(out, "detail: {}", render_detail(item));
    }

    if view.fetch.is_loading() {
        let _ = writeln!(out, "  ...");
    } else if view.visible_items.is_empty() {
        let _ = writeln!(out, "  (no items)");
    } else {
        for item in &view.visible_items {
            let _ = writeln!(out, "{}", render_row(view, item));
        }
    }
    if !view.previous_disabled {
        let _ = writeln!(out, "  [prev] [next]");
    } else {
        let _ = writeln!(out, "  [next]");
    }

    out
}

pub fn render_cart(view: &ViewState) -> String {
    let mut out = String::new();
    if view.cart.held_items().next().is_none() {
        let _ = writeln!(out, "cart is empty");
        return out;
    }
    for item in view.cart.held_items() {
        let _ = writeln!(
            out,
            "{:>6} {:>5}  {}",
            item.id.0,
            item.group_id.0,
            truncate(&item.title, TITLE_WIDTH)
        );
    }
    let _ = writeln!(out, "{}", render_totals(view));
    out
}

fn render_row(view: &ViewState, item: &Item) -> String {
    let marker = if Some(item.id) == view.selected_item_id {
        '>'
    } else {
        ' '
    };
    format!(
        "{marker}{:>6} {:>5}  {:<width$}  x{}",
        item.id.0,
        item.group_id.0,
        truncate(&item.title, TITLE_WIDTH),
        view.cart.quantity(item.id),
        width = TITLE_WIDTH,
    )
}

fn render_totals(view: &ViewState) -> String {
    format!(
        "cart: {} held | total {}",
        view.cart.held_items().count(),
        view.total_metric
    )
}

fn render_detail(item: &Item) -> String {
    format!(
        "#{} group {} \"{}\" image {} thumb {}",
        item.id.0, item.group_id.0, item.title, item.image_url, item.thumbnail_url
    )
}

fn truncate(title: &str, width: usize) -> String {
    if title.chars().count() <= width {
        return title.to_string();
    }
    let mut short: String = title.chars().take(width.saturating_sub(3)).collect();
    short.push_str("...");
    short
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
