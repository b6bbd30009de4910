//! Mocked graph source with fixture topologies.
//!
//! Named fixtures cover a handful of demo apps; ids with the `app-st-`
//! prefix get a synthesized four-service topology. The specific shapes are
//! illustrative fixtures for the `GraphSource` interface, not a contract.

use crate::model::{
    GraphPayload, Position, ServiceEdge, ServiceKind, ServiceNode, ServiceSpec, ServiceStatus,
};

use super::{AppSummary, GraphSource, SourceError};

const ST_PREFIX: &str = "app-st-";

/// In-process stand-in for the topology backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSource;

impl MockSource {
    pub fn new() -> Self {
        Self
    }
}

impl GraphSource for MockSource {
    fn fetch_apps(&self) -> Result<Vec<AppSummary>, SourceError> {
        Ok(vec![
            AppSummary::new("app-st-golang", "supertokens-golang"),
            AppSummary::new("app-st-java", "supertokens-java"),
            AppSummary::new("app-st-python", "supertokens-python"),
            AppSummary::new("app-st-ruby", "supertokens-ruby"),
            AppSummary::new("app-st-go", "supertokens-go"),
        ])
    }

    fn fetch_graph(&self, app_id: &str) -> Result<GraphPayload, SourceError> {
        match app_id {
            "app-ecommerce" => Ok(ecommerce()),
            "app-analytics" => Ok(analytics()),
            "app-social" => Ok(social()),
            "app-logs" => Ok(logs()),
            _ => {
                if let Some(lang) = app_id.strip_prefix(ST_PREFIX) {
                    Ok(supertokens(lang))
                } else {
                    Err(SourceError::NotFound(app_id.to_string()))
                }
            }
        }
    }
}

fn service(
    id: &str,
    name: &str,
    status: ServiceStatus,
    replicas: u32,
    version: Option<&str>,
    cost: Option<&str>,
) -> ServiceNode {
    ServiceNode::new(
        id,
        ServiceSpec {
            name: name.to_string(),
            status,
            replicas,
            version: version.map(str::to_owned),
            cost: cost.map(str::to_owned),
        },
    )
}

fn ecommerce() -> GraphPayload {
    // Raw positions are stale server-side hints; layout overwrites them.
    let mut lb = service(
        "n-1",
        "Frontend LB",
        ServiceStatus::Healthy,
        3,
        Some("v1.0.2"),
        None,
    );
    lb.position = Position::new(100.0, 100.0);
    let mut gw = service(
        "n-2",
        "API Gateway",
        ServiceStatus::Degraded,
        2,
        Some("v2.1.0"),
        None,
    );
    gw.position = Position::new(400.0, 200.0);
    let mut products = service(
        "n-3",
        "Product Service",
        ServiceStatus::Healthy,
        5,
        Some("v1.1.5"),
        None,
    );
    products.position = Position::new(700.0, 100.0);

    GraphPayload::new(
        vec![lb, gw, products],
        vec![
            ServiceEdge::new("e-1-2", "n-1", "n-2").animated(),
            ServiceEdge::new("e-2-3", "n-2", "n-3"),
        ],
    )
}

fn analytics() -> GraphPayload {
    GraphPayload::new(
        vec![
            ServiceNode::new("an-1", ServiceSpec::named("Ingestion")).with_kind(ServiceKind::Input),
            ServiceNode::new("an-2", ServiceSpec::named("Processing")),
            ServiceNode::new("an-3", ServiceSpec::named("Storage")).with_kind(ServiceKind::Output),
        ],
        vec![
            ServiceEdge::new("e-an-1-2", "an-1", "an-2").animated(),
            ServiceEdge::new("e-an-2-3", "an-2", "an-3"),
        ],
    )
}

fn social() -> GraphPayload {
    GraphPayload::new(
        vec![
            ServiceNode::new("soc-1", ServiceSpec::named("Feed API")),
            ServiceNode::new("soc-2", ServiceSpec::named("User Graph")),
            ServiceNode::new("soc-3", ServiceSpec::named("Content Store")),
        ],
        vec![
            ServiceEdge::new("e-soc-1-2", "soc-1", "soc-2"),
            ServiceEdge::new("e-soc-1-3", "soc-1", "soc-3"),
        ],
    )
}

fn logs() -> GraphPayload {
    GraphPayload::new(
        vec![
            ServiceNode::new("log-1", ServiceSpec::named("Collector")),
            ServiceNode::new("log-2", ServiceSpec::named("Indexer")),
            ServiceNode::new("log-3", ServiceSpec::named("Dashboard")),
        ],
        vec![
            ServiceEdge::new("e-log-1-2", "log-1", "log-2").animated(),
            ServiceEdge::new("e-log-2-3", "log-2", "log-3"),
        ],
    )
}

fn supertokens(lang: &str) -> GraphPayload {
    let mut chars = lang.chars();
    let lang_label = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };

    GraphPayload::new(
        vec![
            service(
                "core",
                &format!("{lang_label} Core"),
                ServiceStatus::Healthy,
                3,
                None,
                Some("$0.12/HR"),
            ),
            service(
                "auth",
                "Auth Service",
                ServiceStatus::Healthy,
                2,
                None,
                Some("$0.05/HR"),
            ),
            service(
                "db",
                "User Database",
                ServiceStatus::Healthy,
                1,
                None,
                Some("$0.40/HR"),
            ),
            service(
                "gw",
                "API Gateway",
                ServiceStatus::Degraded,
                4,
                None,
                Some("$0.15/HR"),
            ),
        ],
        vec![
            ServiceEdge::new("e-core-auth", "core", "auth").animated(),
            ServiceEdge::new("e-core-db", "core", "db"),
            ServiceEdge::new("e-auth-db", "auth", "db"),
            ServiceEdge::new("e-auth-gw", "auth", "gw").animated(),
        ],
    )
}

#[cfg(test)]
#[path = "../../tests/rust/test_source_mock.rs"]
mod tests;
