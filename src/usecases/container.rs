use std::sync::Arc;
use tracing::info;

use crate::errors::MonitorResult;
use crate::models::container::{ContainerDetail, ContainerStatsRow};
use crate::models::response::ContainerList;
use crate::repositories::container_runtime::ContainerRuntime;

#[derive(Debug)]
pub struct ContainerUsecase<R>
where
    R: ContainerRuntime + 'static,
{
    pub runtime: Arc<R>,
}

impl<R> Clone for ContainerUsecase<R>
where
    R: ContainerRuntime + 'static,
{
    fn clone(&self) -> Self {
        Self {
            runtime: Arc::clone(&self.runtime),
        }
    }
}

impl<R> ContainerUsecase<R>
where
    R: ContainerRuntime + 'static,
{
    pub fn new(runtime: Arc<R>) -> Self {
        Self { runtime }
    }

    pub async fn list_containers(&self) -> MonitorResult<ContainerList> {
        let containers = self.runtime.list_containers().await?;
        info!(count = containers.len(), "Listed containers");
        Ok(ContainerList::from(containers))
    }

    pub async fn inspect_container(&self, id: &str) -> MonitorResult<ContainerDetail> {
        Ok(self.runtime.inspect_container(id).await?)
    }

    pub async fn container_stats(&self, id: &str) -> MonitorResult<ContainerStatsRow> {
        Ok(self.runtime.container_stats(id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::runtime::RuntimeError;
    use crate::errors::MonitorError;
    use crate::models::container::ContainerSummary;
    use crate::repositories::container_runtime::MockContainerRuntime;

    fn summary(id: &str, name: &str) -> ContainerSummary {
        ContainerSummary {
            id: id.to_string(),
            name: name.to_string(),
            image: "nginx".to_string(),
            status: "Up 2 hours".to_string(),
        }
    }

    #[tokio::test]
    async fn given_two_containers_when_listing_then_count_matches() {
        let mut runtime = MockContainerRuntime::new();
        runtime
            .expect_list_containers()
            .times(1)
            .returning(|| Ok(vec![summary("a1", "web"), summary("b2", "db")]));
        let usecase = ContainerUsecase::new(Arc::new(runtime));

        let list = usecase.list_containers().await.unwrap();

        assert_eq!(list.count, 2);
        assert_eq!(list.containers[0].id, "a1");
    }

    #[tokio::test]
    async fn given_runtime_not_found_when_inspecting_then_error_is_propagated() {
        let mut runtime = MockContainerRuntime::new();
        runtime
            .expect_inspect_container()
            .withf(|id| id == "missing")
            .times(1)
            .returning(|id| {
                Err(RuntimeError::ContainerNotFound {
                    id: id.to_string(),
                    reason: "No such object".to_string(),
                })
            });
        let usecase = ContainerUsecase::new(Arc::new(runtime));

        let result = usecase.inspect_container("missing").await;

        assert!(matches!(
            result,
            Err(MonitorError::Runtime(RuntimeError::ContainerNotFound { .. }))
        ));
    }
}
