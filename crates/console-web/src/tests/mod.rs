/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 * http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */


use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use axum::http::StatusCode;
use console_model::inventory::{Boot, Cpu, Memory, SystemVendor};
use console_model::{Disk, Inventory, Nic, PLACEHOLDER};
use url::Url;
use uuid::Uuid;

use self::common::{
    CLUSTER_ID, CredentialsAnswer, FakeBackend, HOST_ID, credentials, event, get, router,
};
use crate::assisted::AssistedClient;
use crate::cfg::file::ConsoleConfig;
use crate::web::{self, AppState};

fn host_id() -> Uuid {
    HOST_ID.parse().unwrap()
}

fn inventory() -> Inventory {
    Inventory {
        system_vendor: Some(SystemVendor {
            manufacturer: Some("Dell Inc.".to_string()),
            product_name: Some("PowerEdge R750".to_string()),
            serial_number: Some("7XK4Q93".to_string()),
        }),
        cpu: Some(Cpu {
            architecture: Some("x86_64".to_string()),
            model_name: None,
            clock_speed_hz: Some(2_400_000_000),
            count: Some(32),
        }),
        memory: Some(Memory {
            total_bytes: Some(137_438_953_472),
        }),
        bmc_address: Some("10.0.0.1".to_string()),
        bmc_v6address: Some("fe80::1".to_string()),
        boot: Some(Boot {
            current_boot_mode: Some("uefi".to_string()),
            pxe_interface: None,
        }),
        disks: Some(vec![
            Disk {
                name: Some("sda".to_string()),
                drive_type: Some("HDD".to_string()),
                size_bytes: Some(1_000_000_000_000),
                serial: Some("ZA1B2C3D".to_string()),
                model: Some("ST1000NM0055".to_string()),
                wwn: None,
            },
            Disk {
                name: Some("nvme0n1".to_string()),
                drive_type: Some("SSD".to_string()),
                size_bytes: Some(480_103_981_056),
                ..Default::default()
            },
        ]),
        interfaces: Some(vec![Nic {
            name: Some("eno1".to_string()),
            mac_address: Some("b4:96:91:aa:bb:01".to_string()),
            ipv4_addresses: Some(vec!["10.0.0.10".to_string(), "10.0.0.11".to_string()]),
            ipv6_addresses: Some(vec![]),
            speed_mbps: Some(10000),
        }]),
    }
}

fn backend_with_host(inventory: Inventory) -> FakeBackend {
    let mut backend = FakeBackend::default();
    backend.inventories.insert(host_id(), inventory);
    backend
}

#[tokio::test]
async fn test_root() {
    let response = get(router(Arc::new(FakeBackend::default())), "/").await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_credentials_ready() {
    let backend = FakeBackend {
        credentials: CredentialsAnswer::Ready(credentials()),
        ..Default::default()
    };
    let response = get(
        router(Arc::new(backend)),
        &format!("/cluster/{CLUSTER_ID}/credentials"),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.body;
    assert!(body.contains("console-openshift-console.apps.demo.example.com"));
    assert!(body.contains(r#"target="_blank" rel="noopener noreferrer""#));
    assert!(body.contains("<dd>kubeadmin</dd>"));
    assert!(body.contains("\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"));
    // copyable, but never shown as text
    assert!(body.contains(r#"data-copy="Xq9Zm-3kLp2-AbCdE-fGhIj""#));
    assert!(!body.contains(">Xq9Zm-3kLp2-AbCdE-fGhIj<"));
    assert!(body.contains(&format!(r#"href="/cluster/{CLUSTER_ID}/kubeconfig""#)));
    assert!(!body.contains("http-equiv=\"refresh\""));
}

#[tokio::test]
async fn test_credentials_not_available_yet_is_loading() {
    let response = get(
        router(Arc::new(FakeBackend::default())),
        &format!("/cluster/{CLUSTER_ID}/credentials"),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("loading-state"));
    assert!(response.body.contains(r#"http-equiv="refresh" content="5""#));
    // Download stays available in every state
    assert!(
        response
            .body
            .contains(&format!(r#"href="/cluster/{CLUSTER_ID}/kubeconfig""#))
    );
}

#[tokio::test]
async fn test_credentials_slow_fetch_is_loading() {
    let backend = FakeBackend {
        credentials: CredentialsAnswer::Hang,
        ..Default::default()
    };
    let response = get(
        router(Arc::new(backend)),
        &format!("/cluster/{CLUSTER_ID}/credentials"),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("loading-state"));
}

#[tokio::test]
async fn test_credentials_unresponsive_installer_is_loading() {
    // Accepts connections and never answers
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let config = ConsoleConfig {
        api_url: Url::parse(&format!("http://{addr}/api/assisted-install/v1/")).unwrap(),
        fetch_timeout: Duration::from_millis(200),
        ..Default::default()
    };
    let state = Arc::new(AppState {
        backend: Arc::new(AssistedClient::new(&config).unwrap()),
        fetch_timeout: config.fetch_timeout,
        loading_refresh: config.loading_refresh,
    });

    // Either timer may fire first; both must end up as Loading
    for _ in 0..10 {
        let response = get(
            web::routes(state.clone()),
            &format!("/cluster/{CLUSTER_ID}/credentials"),
        )
        .await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.body.contains("loading-state"));
        assert!(response.body.contains(r#"http-equiv="refresh""#));
        assert!(!response.body.contains("Failed to fetch cluster credentials."));
    }
}

#[tokio::test]
async fn test_credentials_error_has_retry() {
    let backend = FakeBackend {
        credentials: CredentialsAnswer::Fail,
        ..Default::default()
    };
    let response = get(
        router(Arc::new(backend)),
        &format!("/cluster/{CLUSTER_ID}/credentials"),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Failed to fetch cluster credentials."));
    assert!(
        response
            .body
            .contains(&format!(r#"href="/cluster/{CLUSTER_ID}/credentials""#))
    );
    assert!(!response.body.contains("kubeadmin"));
}

#[tokio::test]
async fn test_credentials_invalid_cluster_id() {
    let response = get(
        router(Arc::new(FakeBackend::default())),
        "/cluster/not-a-uuid/credentials",
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.starts_with("Invalid Cluster ID not-a-uuid"));
}

#[tokio::test]
async fn test_kubeconfig_download_redirects_every_time() {
    let backend = Arc::new(FakeBackend::default());
    let uri = format!("/cluster/{CLUSTER_ID}/kubeconfig");

    for _ in 0..2 {
        let response = get(router(backend.clone()), &uri).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER);
        assert_eq!(
            response.location.as_deref(),
            Some(
                format!(
                    "https://installer.example.com/api/assisted-install/v1/clusters/{CLUSTER_ID}/downloads/files?file_name=kubeconfig"
                )
                .as_str()
            )
        );
    }
    assert_eq!(backend.file_url_requests.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_host_detail_page() {
    let mut backend = backend_with_host(inventory());
    backend.events.insert(
        host_id(),
        vec![
            event("2026-03-01T12:00:00Z", "Host discovered"),
            event("2026-03-01T12:05:00Z", "Host is ready"),
        ],
    );
    let response = get(
        router(Arc::new(backend)),
        &format!("/cluster/{CLUSTER_ID}/host/{HOST_ID}"),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.body;
    assert!(body.contains("<dd>Dell Inc.</dd>"));
    assert!(body.contains("<dd>7XK4Q93</dd>"));
    assert!(body.contains("<dd>2.40 GHz</dd>"));
    assert!(body.contains("<dd>128.00 GB</dd>"));
    assert!(body.contains("<dd>10.0.0.1, fe80::1</dd>"));
    // CPU model name is absent
    assert!(body.contains(&format!("<dd>{PLACEHOLDER}</dd>")));
    assert!(!body.contains("PXE interface"));

    assert!(body.contains("2 Disks"));
    assert!(body.contains("1 NICs"));
    assert!(body.contains("<th>Drive type</th>"));
    assert!(body.contains("<th>IPv6 address</th>"));
    assert!(body.contains("<td>931.32 GB</td>"));
    assert!(body.contains("<td>10.0.0.10, 10.0.0.11</td>"));
    assert!(body.contains("<td>10000 Mbps</td>"));
    let nvme = body.find("<td>nvme0n1</td>").unwrap();
    let sda = body.find("<td>sda</td>").unwrap();
    assert!(nvme < sda);

    let ready = body.find("Host is ready").unwrap();
    let discovered = body.find("Host discovered").unwrap();
    assert!(ready < discovered);
    assert!(body.contains(&format!(r#"class="host-events" data-host-id="{HOST_ID}""#)));
}

#[tokio::test]
async fn test_host_detail_empty_inventory() {
    let response = get(
        router(Arc::new(backend_with_host(Inventory::default()))),
        &format!("/cluster/{CLUSTER_ID}/host/{HOST_ID}"),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("0 Disks"));
    assert!(response.body.contains("0 NICs"));
    assert!(!response.body.contains("disk-row"));
    assert!(!response.body.contains("nic-row"));
    assert!(response.body.contains("No events"));
}

#[tokio::test]
async fn test_host_detail_json() {
    let response = get(
        router(Arc::new(backend_with_host(inventory()))),
        &format!("/cluster/{CLUSTER_ID}/host/{HOST_ID}.json"),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    let detail: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(detail["host_id"], HOST_ID);
    assert_eq!(detail["summary"]["cores"]["title"], "32");
    assert_eq!(detail["disks"][0]["name"], "nvme0n1");
    assert_eq!(detail["disks"][1]["name"], "sda");
    assert_eq!(detail["disks"][1]["wwn"], PLACEHOLDER);
    assert_eq!(detail["nics"][0]["ipv6_addresses"], "");
}

#[tokio::test]
async fn test_host_not_found() {
    let response = get(
        router(Arc::new(FakeBackend::default())),
        &format!("/cluster/{CLUSTER_ID}/host/{HOST_ID}"),
    )
    .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_host_invalid_id() {
    let response = get(
        router(Arc::new(FakeBackend::default())),
        &format!("/cluster/{CLUSTER_ID}/host/not-a-uuid.json"),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.starts_with("Invalid Host ID not-a-uuid:"));
}

#[tokio::test]
async fn test_host_upstream_failure() {
    let backend = FakeBackend {
        fail_hosts: true,
        ..Default::default()
    };
    let response = get(
        router(Arc::new(backend)),
        &format!("/cluster/{CLUSTER_ID}/host/{HOST_ID}"),
    )
    .await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, "Error loading host");
}

#[tokio::test]
async fn test_event_failure_keeps_host_page() {
    let mut backend = backend_with_host(inventory());
    backend.fail_events = true;
    let response = get(
        router(Arc::new(backend)),
        &format!("/cluster/{CLUSTER_ID}/host/{HOST_ID}"),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Failed to fetch host events."));
    assert!(response.body.contains("2 Disks"));
}

#[tokio::test]
async fn test_event_list_fragment() {
    let mut backend = FakeBackend::default();
    backend
        .events
        .insert(host_id(), vec![event("2026-03-01T12:00:00Z", "Host discovered")]);
    let response = get(
        router(Arc::new(backend)),
        &format!("/cluster/{CLUSTER_ID}/host/{HOST_ID}/events"),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Host discovered"));
    assert!(response.body.contains("2026-03-01 12:00:00"));
    assert!(!response.body.contains("<html"));
}
