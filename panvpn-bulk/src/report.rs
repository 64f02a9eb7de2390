use colored::Colorize;

use crate::build::{RowOutcome, TruncationWarning};
use crate::model::ObjectGraph;
use crate::push::PushReport;

/// Render one truncation warning for stderr.
pub fn render_warning(warning: &TruncationWarning) -> String {
    format!("warning: {warning}").yellow().to_string()
}

/// Render the per-row progress line naming the three created specs.
pub fn render_progress(index: usize, outcome: &RowOutcome) -> String {
    format!(
        "row {index}: tunnel-if={} ike-gw={} ipsec-tunnel={}",
        outcome.tunnel_interface, outcome.ike_gateway, outcome.ipsec_tunnel
    )
}

/// Render the one-line graph summary.
pub fn render_graph_summary(graph: &ObjectGraph) -> String {
    format!(
        "graph tunnel_interfaces={} ike_gateways={} ipsec_tunnels={} virtual_routers={} zones={}",
        graph.tunnel_interfaces.len(),
        graph.ike_gateways.len(),
        graph.ipsec_tunnels.len(),
        graph.virtual_routers.len(),
        graph.zones.len()
    )
}

/// Render the post-push creation counts.
pub fn render_push_report(report: &PushReport) -> String {
    format!(
        "pushed tunnel_interfaces={} virtual_routers={} zones={} ike_gateways={} ipsec_tunnels={}",
        report.tunnel_interfaces,
        report.virtual_routers,
        report.zones,
        report.ike_gateways,
        report.ipsec_tunnels
    )
    .green()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::{render_graph_summary, render_progress};
    use crate::build::build_graph;
    use crate::row::COLUMN_COUNT;

    #[test]
    fn summary_counts_every_category() {
        let mut cells = vec![String::new(); COLUMN_COUNT];
        cells[0] = "tunnel.1".to_string();
        cells[4] = "default".to_string();
        cells[5] = "vpn".to_string();
        cells[6] = "gw-1".to_string();
        cells[10] = "198.51.100.10".to_string();
        cells[20] = "tun-1".to_string();

        let (graph, outcomes) = build_graph(&[cells]).expect("graph");
        assert_eq!(
            render_graph_summary(&graph),
            "graph tunnel_interfaces=1 ike_gateways=1 ipsec_tunnels=1 virtual_routers=1 zones=1"
        );
        assert_eq!(
            render_progress(1, &outcomes[0]),
            "row 1: tunnel-if=tunnel.1 ike-gw=gw-1 ipsec-tunnel=tun-1"
        );
    }
}
