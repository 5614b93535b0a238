// [libs/infra/analytics-store/src/repositories/graph.rs]
//! Bounded two-hop ownership graph traversal (§4.3 `graphTwoHops`, §4.4).
//!
//! Level 0 is the seed supplier. Level 1 is its partners plus every other
//! supplier those partners hold a link to. Level 2 is the partners of those
//! level-1 suppliers plus the further suppliers those partners reach. The
//! walk never goes past level 2 and stops as soon as `max_nodes` is hit;
//! an edge is only emitted once both its endpoints have been kept.

use crate::client::StoreClient;
use crate::errors::StoreError;
use crate::mapping::map_share;
use libsql::{params, Connection};
use sentinel_domain_models::{GraphEdge, GraphNode, GraphNodeKind, GraphView};
use std::collections::HashSet;
use tracing::instrument;

struct PartnerLink {
    partner_id: String,
    partner_name: String,
    share: Option<String>,
}

struct SupplierLink {
    supplier_id: String,
    legal_name: String,
}

pub struct GraphRepository {
    client: StoreClient,
}

impl GraphRepository {
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn graph_two_hops(&self, seed_id: &str, max_nodes: usize) -> Result<Option<GraphView>, StoreError> {
        let conn = self.client.connection()?;

        let seed_name: Option<String> = {
            let mut rows = conn.query("SELECT legal_name FROM suppliers WHERE company_id = ?1", params![seed_id]).await?;
            match rows.next().await? {
                Some(row) => Some(row.get(0)?),
                None => None,
            }
        };
        let Some(seed_name) = seed_name else {
            return Ok(None);
        };

        let mut nodes = Vec::new();
        let mut edges = Vec::new();
        let mut visited_suppliers: HashSet<String> = HashSet::new();
        let mut visited_partners: HashSet<String> = HashSet::new();
        let mut truncated = false;

        visited_suppliers.insert(seed_id.to_string());
        nodes.push(company_node(seed_id, &seed_name));

        let level1_partners = partners_of(&conn, seed_id).await?;
        let mut level1_suppliers: Vec<String> = Vec::new();

        for link in &level1_partners {
            if nodes.len() >= max_nodes {
                truncated = true;
                break;
            }
            if visited_partners.insert(link.partner_id.clone()) {
                nodes.push(person_node(&link.partner_id, &link.partner_name));
            }
            edges.push(edge(&link.partner_id, seed_id, &link.share)?);
        }

        for link in &level1_partners {
            if !visited_partners.contains(&link.partner_id) {
                continue;
            }
            let peers = suppliers_of(&conn, &link.partner_id, seed_id).await?;
            for peer in peers {
                if visited_suppliers.contains(&peer.supplier_id) {
                    continue;
                }
                if nodes.len() >= max_nodes {
                    truncated = true;
                    break;
                }
                visited_suppliers.insert(peer.supplier_id.clone());
                level1_suppliers.push(peer.supplier_id.clone());
                nodes.push(company_node(&peer.supplier_id, &peer.legal_name));
                edges.push(edge(&link.partner_id, &peer.supplier_id, &find_share(&conn, &link.partner_id, &peer.supplier_id).await?)?);
            }
        }

        'outer: for supplier_id in &level1_suppliers {
            let links = partners_of(&conn, supplier_id).await?;
            for link in links {
                if visited_partners.contains(&link.partner_id) {
                    edges.push(edge(&link.partner_id, supplier_id, &link.share)?);
                    continue;
                }
                if nodes.len() >= max_nodes {
                    truncated = true;
                    break 'outer;
                }
                visited_partners.insert(link.partner_id.clone());
                nodes.push(person_node(&link.partner_id, &link.partner_name));
                edges.push(edge(&link.partner_id, supplier_id, &link.share)?);

                let further = suppliers_of(&conn, &link.partner_id, supplier_id).await?;
                for peer in further {
                    if visited_suppliers.contains(&peer.supplier_id) {
                        continue;
                    }
                    if nodes.len() >= max_nodes {
                        truncated = true;
                        break 'outer;
                    }
                    visited_suppliers.insert(peer.supplier_id.clone());
                    nodes.push(company_node(&peer.supplier_id, &peer.legal_name));
                    let share = find_share(&conn, &link.partner_id, &peer.supplier_id).await?;
                    edges.push(edge(&link.partner_id, &peer.supplier_id, &share)?);
                }
            }
        }

        Ok(Some(GraphView { nodes, edges, truncated }))
    }
}

fn company_node(id: &str, legal_name: &str) -> GraphNode {
    GraphNode { id: id.to_string(), kind: GraphNodeKind::Company, label: legal_name.to_string() }
}

fn person_node(id: &str, name: &str) -> GraphNode {
    GraphNode { id: id.to_string(), kind: GraphNodeKind::Person, label: name.to_string() }
}

fn edge(partner_id: &str, supplier_id: &str, share: &Option<String>) -> Result<GraphEdge, StoreError> {
    Ok(GraphEdge {
        source: partner_id.to_string(),
        target: supplier_id.to_string(),
        kind: "owns-share-of",
        share: share.as_deref().map(map_share).transpose()?,
    })
}

async fn partners_of(conn: &Connection, supplier_id: &str) -> Result<Vec<PartnerLink>, StoreError> {
    let mut rows = conn
        .query(
            "SELECT l.partner_id_hash, p.name, l.capital_share
             FROM ownership_links l
             JOIN partner_profiles p ON p.person_id_hash = l.partner_id_hash
             WHERE l.supplier_id = ?1",
            params![supplier_id],
        )
        .await?;

    let mut links = Vec::new();
    while let Some(row) = rows.next().await? {
        links.push(PartnerLink {
            partner_id: row.get(0)?,
            partner_name: row.get(1)?,
            share: row.get(2)?,
        });
    }
    Ok(links)
}

async fn suppliers_of(conn: &Connection, partner_id: &str, exclude_supplier: &str) -> Result<Vec<SupplierLink>, StoreError> {
    let mut rows = conn
        .query(
            "SELECT s.company_id, s.legal_name
             FROM ownership_links l
             JOIN suppliers s ON s.company_id = l.supplier_id
             WHERE l.partner_id_hash = ?1 AND l.supplier_id != ?2",
            params![partner_id, exclude_supplier],
        )
        .await?;

    let mut links = Vec::new();
    while let Some(row) = rows.next().await? {
        links.push(SupplierLink { supplier_id: row.get(0)?, legal_name: row.get(1)? });
    }
    Ok(links)
}

async fn find_share(conn: &Connection, partner_id: &str, supplier_id: &str) -> Result<Option<String>, StoreError> {
    let mut rows = conn
        .query(
            "SELECT capital_share FROM ownership_links WHERE partner_id_hash = ?1 AND supplier_id = ?2",
            params![partner_id, supplier_id],
        )
        .await?;
    match rows.next().await? {
        Some(row) => Ok(row.get(0)?),
        None => Ok(None),
    }
}
