use super::*;
use catalog_core::{recompute, CartLedger, FetchStatus, ViewInputs};
use shared::domain::GroupId;
use std::sync::Arc;

fn item(id: i64, title: &str) -> Item {
    Item {
        id: ItemId(id),
        group_id: GroupId(1),
        title: title.to_string(),
        image_url: String::new(),
        thumbnail_url: String::new(),
    }
}

fn view_with(items: Vec<Item>, cart: CartLedger) -> ViewState {
    recompute(&ViewInputs {
        raw_page: Arc::from(items),
        cart,
        fetch: FetchStatus::Ready,
        ..ViewInputs::default()
    })
}

#[test]
fn parses_navigation_and_search() {
    let view = view_with(vec![], CartLedger::new());

    assert_eq!(
        parse_line("search porro iure", &view),
        Ok(CliAction::Command(Command::SetSearchTerm(
            "porro iure".to_string()
        )))
    );
    assert_eq!(
        parse_line("clear", &view),
        Ok(CliAction::Command(Command::SetSearchTerm(String::new())))
    );
    assert_eq!(
        parse_line("sort", &view),
        Ok(CliAction::Command(Command::ToggleSortOrder))
    );
    assert_eq!(
        parse_line("next\r\n", &view),
        Ok(CliAction::Command(Command::NextPage))
    );
    assert_eq!(
        parse_line("size 20", &view),
        Ok(CliAction::Command(Command::SetPageSize(PageSize::Twenty)))
    );
    assert_eq!(parse_line("quit", &view), Ok(CliAction::Quit));
    assert_eq!(parse_line("cart", &view), Ok(CliAction::ShowCart));
}

#[test]
fn prev_is_refused_on_first_page() {
    let view = view_with(vec![], CartLedger::new());
    assert_eq!(parse_line("prev", &view), Err(InputError::PreviousDisabled));
}

#[test]
fn rejects_bad_arguments() {
    let view = view_with(vec![], CartLedger::new());

    assert_eq!(
        parse_line("size 25", &view),
        Err(InputError::PageSize(DomainError::UnsupportedPageSize(25)))
    );
    assert_eq!(
        parse_line("select", &view),
        Err(InputError::MissingArgument("select"))
    );
    assert_eq!(
        parse_line("select abc", &view),
        Err(InputError::InvalidId("abc".to_string()))
    );
    assert_eq!(
        parse_line("dance", &view),
        Err(InputError::UnknownCommand("dance".to_string()))
    );
}

#[test]
fn cart_commands_resolve_visible_items_then_cart() {
    let earlier = item(3, "from an earlier page");
    let cart = CartLedger::new().add(&earlier);
    let view = view_with(vec![item(11, "on this page")], cart);

    assert_eq!(
        parse_line("add 11", &view),
        Ok(CliAction::Command(Command::AddToCart(item(11, "on this page"))))
    );
    assert_eq!(
        parse_line("remove 3", &view),
        Ok(CliAction::Command(Command::RemoveFromCart(earlier)))
    );
    assert_eq!(
        parse_line("add 99", &view),
        Err(InputError::UnknownItem(ItemId(99)))
    );
}
