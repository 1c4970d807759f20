use percent_encoding::percent_decode_str;
use url::Url;

const ROUTE_BASE: &str = "https://nova.local/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
    pub highlighted: bool,
    /// `false` for plans that go through sales instead of checkout.
    pub purchasable: bool,
}

impl Plan {
    fn new(name: &str, price: &str, features: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            price: price.to_owned(),
            features: features.iter().map(|f| (*f).to_owned()).collect(),
            highlighted: false,
            purchasable: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
}

impl Default for PlanCatalog {
    fn default() -> Self {
        Self::nova()
    }
}

impl PlanCatalog {
    pub fn nova() -> Self {
        let startup = Plan::new(
            "Startup",
            "$999/mo",
            &[
                "Access to Quantum Propulsion API",
                "Basic mission support",
                "5 team members",
                "Community access",
                "Email support",
            ],
        );
        let mut enterprise = Plan::new(
            "Enterprise",
            "$4,999/mo",
            &[
                "Full technology stack access",
                "Priority mission control",
                "Unlimited team members",
                "24/7 support",
                "Custom integration",
                "Dedicated account manager",
            ],
        );
        enterprise.highlighted = true;
        let mut custom = Plan::new(
            "Custom",
            "Contact us",
            &[
                "Custom technology development",
                "Full mission management",
                "Hardware integration",
                "On-site support",
                "Strategic partnership",
                "Custom SLAs",
            ],
        );
        custom.purchasable = false;

        Self {
            plans: vec![startup, enterprise, custom],
        }
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// Exact-name lookup restricted to plans that can be checked out.
    pub fn purchasable(&self, name: &str) -> Option<&Plan> {
        self.plans
            .iter()
            .find(|plan| plan.purchasable && plan.name == name)
    }
}

/// Extracts the decoded plan name from a `/checkout/<plan>` route.
///
/// Returns `None` for any other path shape.
pub fn plan_from_route(route: &str) -> Option<String> {
    let base = Url::parse(ROUTE_BASE).ok()?;
    let url = base.join(route.trim()).ok()?;
    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());
    if segments.next()? != "checkout" {
        return None;
    }
    let plan = segments.next()?;
    if segments.next().is_some() {
        return None;
    }
    let decoded = percent_decode_str(plan).decode_utf8().ok()?;
    Some(decoded.into_owned())
}
