use crate::{AppRoute, DashboardSection, HistoryNavigator, Navigator};

#[test]
fn given_push_navigation_when_going_back_then_previous_route_restored() {
    let navigator = HistoryNavigator::default();
    navigator.navigate(AppRoute::CookiePolicy, false);

    assert_eq!(navigator.current(), AppRoute::CookiePolicy);
    assert_eq!(navigator.back(), AppRoute::Home);
}

#[test]
fn given_replace_navigation_when_going_back_then_replaced_entry_is_gone() {
    let navigator = HistoryNavigator::new(AppRoute::CookiePolicy);
    navigator.navigate(AppRoute::Dashboard(DashboardSection::Chats), false);
    navigator.navigate(AppRoute::Home, true);

    assert_eq!(
        navigator.history(),
        vec![AppRoute::CookiePolicy, AppRoute::Home]
    );
    assert_eq!(navigator.back(), AppRoute::CookiePolicy);
}

#[test]
fn given_single_entry_when_going_back_then_stays() {
    let navigator = HistoryNavigator::default();
    assert_eq!(navigator.back(), AppRoute::Home);
    assert_eq!(navigator.history().len(), 1);
}
