//! `supplydash status`: current context and per-endpoint reachability.

use anyhow::Result;
use supplydash_client::{EndpointProbe, SupplyClient};
use supplydash_core::DashboardConfig;

use crate::table::{Cell, Table};

pub async fn status(context: Option<&str>, config: &DashboardConfig, output_json: bool) -> Result<()> {
    let client = SupplyClient::new(config.base_url.trim(), config.retry_policy());
    let probes = client.probe().await;

    if output_json {
        let body = serde_json::json!({
            "context": context,
            "server": client.base_url(),
            "endpoints": probes,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("Context:   {}", context.unwrap_or("-"));
    println!("Server:    {}", client.base_url());
    let reachable = probes.iter().filter(|p| p.is_ok()).count();
    let summary = match reachable {
        0 => "disconnected".to_string(),
        n if n == probes.len() => "connected".to_string(),
        n => format!("degraded ({} of {} endpoints)", n, probes.len()),
    };
    println!("Status:    {}\n", summary);
    print!("{}", probe_table(&probes).render());
    Ok(())
}

pub fn probe_table(probes: &[EndpointProbe]) -> Table {
    let mut table = Table::new(vec!["ENDPOINT", "STATUS", "RECORDS", "DETAIL"]);
    for p in probes {
        table.push(vec![
            Cell::text(p.endpoint.clone()),
            Cell::from(if p.is_ok() { "ok" } else { "error" }),
            p.records
                .map(|n| Cell::Int(n as i64))
                .unwrap_or_else(|| Cell::from("-")),
            Cell::text(p.error.clone().unwrap_or_default()),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_table() {
        let probes = vec![
            EndpointProbe {
                endpoint: "orders".to_string(),
                url: "http://x/api/orders".to_string(),
                records: Some(12),
                error: None,
            },
            EndpointProbe {
                endpoint: "suppliers".to_string(),
                url: "http://x/api/suppliers".to_string(),
                records: None,
                error: Some("server error (500): down".to_string()),
            },
        ];
        let text = probe_table(&probes).render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "orders     ok      12");
        assert_eq!(lines[2], "suppliers  error   -        server error (500): down");
    }
}
