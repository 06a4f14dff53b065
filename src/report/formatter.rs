use super::{AllocationReport, NodeReport, TransferReport};
use crate::grid::Role;

/// Formats allocation reports into the plain-text summary printed by the CLI.
pub struct ReportFormatter;

impl ReportFormatter {
    /// One line per node followed by one line per transfer, each newline-terminated.
    pub fn format_report(report: &AllocationReport) -> String {
        report
            .nodes
            .iter()
            .map(Self::format_node)
            .chain(report.transfers.iter().map(Self::format_transfer))
            .map(|line| line + "\n")
            .collect()
    }

    pub fn format_node(node: &NodeReport) -> String {
        let verb = match node.role {
            Role::Producer => "output",
            Role::Consumer => "received",
        };
        format!(
            "Node \"{}\" {} {}/{} power",
            node.label, verb, node.satisfied, node.declared
        )
    }

    pub fn format_transfer(transfer: &TransferReport) -> String {
        format!(
            "Transferred {}/{} from {} to {}",
            transfer.amount, transfer.capacity, transfer.from_label, transfer.to_label
        )
    }
}
