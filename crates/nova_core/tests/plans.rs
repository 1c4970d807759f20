use nova_core::{plan_from_route, PlanCatalog};
use pretty_assertions::assert_eq;

#[test]
fn route_segment_is_percent_decoded() {
    assert_eq!(
        plan_from_route("/checkout/Startup%20Plan"),
        Some("Startup Plan".to_string())
    );
}

#[test]
fn trailing_slash_is_accepted() {
    assert_eq!(
        plan_from_route("/checkout/Startup/"),
        Some("Startup".to_string())
    );
}

#[test]
fn other_path_shapes_are_rejected() {
    assert_eq!(plan_from_route("/pricing/Startup"), None);
    assert_eq!(plan_from_route("/checkout/"), None);
    assert_eq!(plan_from_route("/checkout/Startup/extra"), None);
}

#[test]
fn invalid_utf8_segment_is_rejected() {
    assert_eq!(plan_from_route("/checkout/%E0%A4%A"), None);
}

#[test]
fn only_listed_plans_can_be_purchased() {
    let catalog = PlanCatalog::nova();
    assert_eq!(
        catalog.purchasable("Enterprise").map(|plan| plan.price.as_str()),
        Some("$4,999/mo")
    );
    assert!(catalog.purchasable("Custom").is_none());
    assert!(catalog.purchasable("startup").is_none());
}
