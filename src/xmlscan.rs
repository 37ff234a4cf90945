// File: xmlscan.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::error::ScanError;
use crate::targets::TargetSet;
use log::debug;
use roxmltree::{Document, Node};

/// Pull scan targets out of an XML report. The root element decides the
/// schema: `nmaprun` or `servicescan`. Anything else is fatal. Records
/// missing expected attributes degrade to a narrower match or are skipped
/// on their own; they never abort the parse.
pub fn extract_targets(xml: &str, set: &mut TargetSet) -> Result<(), ScanError> {
    let doc = Document::parse(xml).map_err(|e| ScanError::InvalidXml(e.to_string()))?;
    let root = doc.root_element();

    if root.has_tag_name("nmaprun") {
        extract_nmap(root, set);
        Ok(())
    } else if root.has_tag_name("servicescan") {
        extract_servicescan(root, set);
        Ok(())
    } else {
        Err(ScanError::InvalidXml(format!(
            "unrecognized root element <{}>",
            root.tag_name().name()
        )))
    }
}

fn extract_nmap(root: Node<'_, '_>, set: &mut TargetSet) {
    for host in root.descendants().filter(|n| n.has_tag_name("host")) {
        let addr = host
            .children()
            .find(|n| n.has_tag_name("address"))
            .and_then(|n| n.attribute("addr"));
        let Some(addr) = addr else {
            debug!("host element without address, skipping");
            continue;
        };

        for port in host.descendants().filter(|n| n.has_tag_name("port")) {
            if port.attribute("protocol") != Some("tcp") {
                continue;
            }
            let Some(portid) = port.attribute("portid") else {
                continue;
            };
            let state = port
                .children()
                .find(|n| n.has_tag_name("state"))
                .and_then(|n| n.attribute("state"));
            if state != Some("open") {
                continue;
            }

            let service = port.children().find(|n| n.has_tag_name("service"));
            let name = service.and_then(|n| n.attribute("name"));
            let tunnel = service.and_then(|n| n.attribute("tunnel")).unwrap_or("");

            if let Some(target) = nmap_target(addr, portid, name, tunnel) {
                set.insert(target);
            }
        }
    }
}

/// Branch order matters: the service name wins over the port-number
/// fallbacks, and unrecognized ports yield nothing.
fn nmap_target(host: &str, port: &str, service: Option<&str>, tunnel: &str) -> Option<String> {
    let is_http = service == Some("http");

    if is_http && port == "80" && tunnel.is_empty() {
        Some(format!("http://{}", host))
    } else if is_http && tunnel.is_empty() {
        Some(format!("http://{}:{}", host, port))
    } else if is_http && port == "443" && tunnel == "ssl" {
        Some(format!("https://{}", host))
    } else if is_http && tunnel == "ssl" {
        Some(format!("https://{}:{}", host, port))
    } else if port == "80" {
        Some(format!("http://{}", host))
    } else if port == "443" {
        Some(format!("https://{}", host))
    } else {
        None
    }
}

fn extract_servicescan(root: Node<'_, '_>, set: &mut TargetSet) {
    for host in root.descendants().filter(|n| n.has_tag_name("host")) {
        let Some(addr) = host.attribute("address") else {
            debug!("host element without address attribute, skipping");
            continue;
        };

        for port in host.descendants().filter(|n| n.has_tag_name("port")) {
            if port.attribute("protocol") != Some("TCP") {
                continue;
            }
            if port.attribute("state") != Some("open") {
                continue;
            }
            let (Some(number), Some(description)) =
                (port.attribute("number"), port.attribute("description"))
            else {
                continue;
            };

            if let Some(target) = servicescan_target(addr, number, description) {
                set.insert(target);
            }
        }
    }
}

fn servicescan_target(host: &str, port: &str, description: &str) -> Option<String> {
    match description {
        "HTTP" if port == "80" => Some(format!("http://{}", host)),
        "HTTP" | "HTTP-ALT" => Some(format!("http://{}:{}", host, port)),
        "HTTPS" if port == "443" => Some(format!("https://{}", host)),
        "HTTPS" => Some(format!("https://{}:{}", host, port)),
        _ => None,
    }
}
