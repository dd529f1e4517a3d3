use super::{client_responding, is_schema_error};
use crate::{
    DockerState, UnraidClient,
    core::infrastructure::executor::MockQueryExecutor,
    operations::{DOCKER_QUERY, DOCKER_START_MUTATION, DOCKER_STOP_MUTATION, VMS_QUERY},
};

fn container(id: &str, names: &[&str], state: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "names": names,
        "state": state,
        "image": "lscr.io/linuxserver/plex:latest",
        "autoStart": true
    })
}

#[tokio::test]
async fn test_containers_success() {
    let client = client_responding(
        DOCKER_QUERY,
        None,
        serde_json::json!({
            "docker": {
                "containers": [
                    container("srv:c1", &["/plex"], "RUNNING"),
                    {
                        "id": "srv:c2",
                        "names": ["/nginx-proxy-manager", "/npm"],
                        "state": "EXITED",
                        "image": "jc21/nginx-proxy-manager:2",
                        "autoStart": false
                    }
                ]
            }
        }),
    );

    let containers = client.query_docker_containers().await.unwrap();
    assert_eq!(containers.len(), 2);

    assert_eq!(containers[0].id, "srv:c1");
    assert_eq!(containers[0].name, "plex");
    assert_eq!(containers[0].state, DockerState::Running);
    assert_eq!(containers[0].image, "lscr.io/linuxserver/plex:latest");
    assert!(containers[0].autostart);

    assert_eq!(containers[1].name, "nginx-proxy-manager");
    assert_eq!(containers[1].state, DockerState::Exited);
    assert!(!containers[1].autostart);
}

#[tokio::test]
async fn test_container_name_derivation() {
    let client = client_responding(
        DOCKER_QUERY,
        None,
        serde_json::json!({
            "docker": {
                "containers": [
                    container("srv:c1", &["//double"], "RUNNING"),
                    container("srv:c2", &["bare"], "RUNNING"),
                    container("srv:c3", &[], "CREATED")
                ]
            }
        }),
    );

    let containers = client.query_docker_containers().await.unwrap();
    let names: Vec<_> = containers.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["/double", "bare", "srv:c3"]);
}

#[tokio::test]
async fn test_containers_every_state_round_trips() {
    let containers: Vec<_> = DockerState::ALL
        .iter()
        .enumerate()
        .map(|(i, state)| container(&format!("srv:c{}", i), &["/x"], state.as_str()))
        .collect();
    let client = client_responding(
        DOCKER_QUERY,
        None,
        serde_json::json!({ "docker": { "containers": containers } }),
    );

    let states: Vec<_> = client
        .query_docker_containers()
        .await
        .unwrap()
        .iter()
        .map(|c| c.state)
        .collect();
    assert_eq!(states, DockerState::ALL);
}

#[tokio::test]
async fn test_containers_lowercase_state_is_rejected() {
    let client = client_responding(
        DOCKER_QUERY,
        None,
        serde_json::json!({
            "docker": { "containers": [container("srv:c1", &["/plex"], "running")] }
        }),
    );

    let err = client.query_docker_containers().await.unwrap_err();
    assert!(is_schema_error(&err), "{:?}", err);
}

#[tokio::test]
async fn test_docker_start_and_stop() {
    let variables = Some(serde_json::json!({ "id": "srv:c1" }));

    let client = client_responding(
        DOCKER_START_MUTATION,
        variables.clone(),
        serde_json::json!({ "docker": { "start": { "id": "srv:c1", "state": "RUNNING" } } }),
    );
    assert!(client.docker_start("srv:c1").await.unwrap());

    let client = client_responding(
        DOCKER_STOP_MUTATION,
        variables.clone(),
        serde_json::json!({ "docker": { "stop": { "id": "srv:c1", "state": "EXITED" } } }),
    );
    assert!(client.docker_stop("srv:c1").await.unwrap());

    let client = client_responding(
        DOCKER_STOP_MUTATION,
        variables,
        serde_json::json!({ "docker": { "stop": null } }),
    );
    assert!(!client.docker_stop("srv:c1").await.unwrap());
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let mut executor = MockQueryExecutor::new();
    executor
        .expect_execute()
        .withf(|op, _| op.name == DOCKER_QUERY.name)
        .times(1)
        .returning(|_, _| {
            Ok(serde_json::json!({
                "docker": { "containers": [container("srv:c1", &["/plex"], "RUNNING")] }
            }))
        });
    executor
        .expect_execute()
        .withf(|op, _| op.name == VMS_QUERY.name)
        .times(1)
        .returning(|_, _| Ok(serde_json::json!({ "vms": { "domain": [] } })));
    let client = UnraidClient::with_executor(executor);
    let other = client.clone();

    let (containers, vms) = tokio::join!(
        client.query_docker_containers(),
        tokio::spawn(async move { other.query_vms().await })
    );

    assert_eq!(containers.unwrap().len(), 1);
    assert!(vms.unwrap().unwrap().is_empty());
}
