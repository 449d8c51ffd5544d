use bytes::Bytes;
use occ_state::{
    AddInput, CommitOffsetsInput, InMemoryKv, ListCommittedOffsetsInput, OccOptions, PollInput, ReadInput,
    RpcServerShutdownHandle, SendInput, StateNode, StateNodeConfig, StoreLocation, StoreRpcServer,
};
use std::collections::{BTreeMap, HashSet};
use std::error::Error;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::sync::Arc;
use tokio::time::{sleep, Duration};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_sends_through_remote_store() -> Result<(), Box<dyn Error>> {
    let (_store, nodes) = cluster(17301, 3).await?;

    let mut tasks = Vec::new();
    for (n, node) in nodes.iter().enumerate() {
        for i in 0..10 {
            let node = node.clone();
            tasks.push(tokio::spawn(async move {
                node.send(SendInput {
                    key: "topic-a".to_string(),
                    payload: Bytes::from(format!("n{}-m{}", n, i)),
                    timeout: None,
                })
                .await
                .map(|output| output.offset)
            }));
        }
    }
    let mut offsets = HashSet::new();
    for task in tasks {
        assert!(offsets.insert(task.await??), "offset handed out twice");
    }
    assert_eq!(offsets, (0..30).collect::<HashSet<u64>>());

    let polled = nodes[1]
        .poll(PollInput {
            offsets: offsets_of(&[("topic-a", 0)]),
            timeout: None,
        })
        .await?;
    let entries = &polled.msgs["topic-a"];
    assert_eq!(entries.len(), 30);
    assert!(entries.windows(2).all(|pair| pair[0].offset < pair[1].offset));

    // Commits from any node land in the same tracker, and never go backward.
    nodes[0]
        .commit_offsets(CommitOffsetsInput {
            offsets: offsets_of(&[("topic-a", 20)]),
            timeout: None,
        })
        .await?;
    nodes[2]
        .commit_offsets(CommitOffsetsInput {
            offsets: offsets_of(&[("topic-a", 7)]),
            timeout: None,
        })
        .await?;
    let listed = nodes[1]
        .list_committed_offsets(ListCommittedOffsetsInput {
            keys: vec!["topic-a".to_string(), "topic-b".to_string()],
            timeout: None,
        })
        .await?;
    assert_eq!(listed.offsets, offsets_of(&[("topic-a", 20)]));

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn counters_sum_across_nodes() -> Result<(), Box<dyn Error>> {
    let (_store, nodes) = cluster(17302, 3).await?;

    let mut tasks = Vec::new();
    for node in &nodes {
        for _ in 0..10 {
            let node = node.clone();
            tasks.push(tokio::spawn(async move {
                node.add(AddInput {
                    key: "visits".to_string(),
                    delta: 2,
                    timeout: None,
                })
                .await
            }));
        }
    }
    for task in tasks {
        task.await??;
    }

    for node in &nodes {
        let read = node
            .read(ReadInput {
                key: "visits".to_string(),
                timeout: None,
            })
            .await?;
        assert_eq!(read.value, 60);
    }

    Ok(())
}

#[tokio::test]
async fn unknown_keys_are_quiet() -> Result<(), Box<dyn Error>> {
    let (_store, nodes) = cluster(17303, 1).await?;
    let node = &nodes[0];

    let read = node
        .read(ReadInput {
            key: "never-added".to_string(),
            timeout: None,
        })
        .await?;
    let polled = node
        .poll(PollInput {
            offsets: offsets_of(&[("never-sent", 0)]),
            timeout: None,
        })
        .await?;
    let listed = node
        .list_committed_offsets(ListCommittedOffsetsInput {
            keys: vec!["never-committed".to_string()],
            timeout: None,
        })
        .await?;

    assert_eq!(read.value, 0);
    assert!(polled.msgs.is_empty());
    assert!(listed.offsets.is_empty());

    Ok(())
}

#[tokio::test]
async fn in_process_nodes_share_one_store() -> Result<(), Box<dyn Error>> {
    let kv = InMemoryKv::new();
    let n1 = occ_state::try_create_state_node(config("n1", StoreLocation::InProcess(kv.clone()))).await?;
    let n2 = occ_state::try_create_state_node(config("n2", StoreLocation::InProcess(kv))).await?;

    let sent = n1
        .send(SendInput {
            key: "k".to_string(),
            payload: Bytes::from_static(b"hello"),
            timeout: None,
        })
        .await?;
    let polled = n2
        .poll(PollInput {
            offsets: offsets_of(&[("k", sent.offset)]),
            timeout: None,
        })
        .await?;

    assert_eq!(polled.msgs["k"][0].payload, Bytes::from_static(b"hello"));

    Ok(())
}

// Store server plus `num_nodes` nodes connected to it. The store stops when the handle drops.
async fn cluster(
    store_port: u16,
    num_nodes: usize,
) -> Result<(RpcServerShutdownHandle, Vec<Arc<StateNode>>), Box<dyn Error>> {
    let (handle, signal) = occ_state::shutdown_signal();
    let server = StoreRpcServer::new(discard_logger(), Arc::new(InMemoryKv::new()));
    let addr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, store_port));
    tokio::spawn(server.run(addr, signal));

    let mut nodes = Vec::with_capacity(num_nodes);
    for i in 0..num_nodes {
        let node = connect_with_retry(format!("n{}", i), store_port).await?;
        nodes.push(Arc::new(node));
    }

    Ok((handle, nodes))
}

async fn connect_with_retry(node_id: String, store_port: u16) -> Result<StateNode, Box<dyn Error>> {
    let mut attempts = 0;
    loop {
        let store = StoreLocation::Remote {
            ip: Ipv4Addr::LOCALHOST,
            port: store_port,
        };
        match occ_state::try_create_state_node(config(&node_id, store)).await {
            Ok(node) => return Ok(node),
            Err(e) if attempts >= 20 => return Err(e.into()),
            Err(_) => {
                attempts += 1;
                sleep(Duration::from_millis(50)).await;
            }
        }
    }
}

fn config(node_id: &str, store: StoreLocation) -> StateNodeConfig {
    StateNodeConfig {
        node_id: node_id.to_string(),
        store,
        info_logger: discard_logger(),
        options: OccOptions {
            operation_timeout: Some(Duration::from_secs(10)),
            ..OccOptions::default()
        },
    }
}

fn offsets_of(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
    pairs.iter().map(|(k, o)| (k.to_string(), *o)).collect()
}

fn discard_logger() -> slog::Logger {
    slog::Logger::root(slog::Discard, slog::o!())
}
