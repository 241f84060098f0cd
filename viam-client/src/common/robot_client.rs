//! gRPC client for a robot. [`RobotClient`] is the entry point for all
//! interactions with a remote robot: it discovers the robot's resources,
//! materializes typed component proxies for them through a
//! [`ClientRegistry`], and keeps the set current with an optional periodic
//! refresh.
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;

use async_executor::Task;
use async_io::Timer;
use thiserror::Error;

use super::component::{ComponentClient, ComponentType};
use super::dial::{dial, DialError, DialOptions};
use super::exec::Executor;
use super::grpc_client::{call_unary, Channel, GrpcClientError};
use super::registry::ClientRegistry;
use super::service::ServiceClient;
use crate::proto::common::v1::{PoseInFrame, ResourceName, Transform};
use crate::proto::robot::v1::{
    FrameSystemConfig, FrameSystemConfigRequest, FrameSystemConfigResponse, ResourceNamesRequest,
    ResourceNamesResponse, TransformPoseRequest, TransformPoseResponse,
};

static COMPONENT_TYPE: &str = "component";
static SERVICE_TYPE: &str = "service";
// resources proxied from another robot; they carry no local client
static REMOTE_SUBTYPE: &str = "remote";

#[derive(Error, Debug)]
pub enum RobotClientError {
    #[error("resource {0} does not describe a component")]
    NotAComponent(String),
    #[error("component '{0}' not found on the robot")]
    ComponentNotFound(String),
    #[error("component '{0}' is not of the requested client type")]
    ComponentTypeMismatch(String),
    #[error("service '{0}' is not implemented or offered by this robot")]
    ServiceNotImplemented(&'static str),
    #[error(transparent)]
    DialError(#[from] DialError),
    #[error(transparent)]
    RpcError(#[from] GrpcClientError),
}

/// The component proxies a robot exposed at one discovery generation.
///
/// A manager is built from scratch whenever discovery reports a change and
/// installed wholesale, never mutated in place. A caller holding a proxy
/// across an install keeps a valid handle bound to the shared channel.
#[derive(Default)]
pub struct ResourceManager {
    components: HashMap<String, ComponentType>,
}

impl ResourceManager {
    fn register(&mut self, component: ComponentType) {
        let _ = self
            .components
            .insert(component.name().to_owned(), component);
    }

    fn get_component(&self, name: &str) -> Option<&ComponentType> {
        self.components.get(name)
    }

    fn component_names(&self) -> BTreeSet<&str> {
        self.components.keys().map(|k| k.as_str()).collect()
    }
}

#[derive(Clone, Debug)]
pub struct RobotClientOptions {
    /// How often to re-run resource discovery against the robot. Zero
    /// disables the periodic refresh entirely.
    pub refresh_interval: Duration,
}

impl Default for RobotClientOptions {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::ZERO,
        }
    }
}

struct RobotState {
    resource_names: Vec<ResourceName>,
    manager: Rc<ResourceManager>,
}

struct RobotInner {
    channel: Channel,
    registry: ClientRegistry,
    state: Mutex<RobotState>,
}

impl RobotInner {
    async fn refresh(&self) -> Result<(), RobotClientError> {
        let response: ResourceNamesResponse = call_unary(
            self.channel.as_ref(),
            "/viam.robot.v1.RobotService/ResourceNames",
            ResourceNamesRequest {},
        )
        .await?;
        let resource_names = response.resources;
        {
            let state = self.state.lock().unwrap();
            if resource_names == state.resource_names {
                return Ok(());
            }
        }
        let mut manager = ResourceManager::default();
        for rname in &resource_names {
            if rname.r#type != COMPONENT_TYPE || rname.subtype == REMOTE_SUBTYPE {
                continue;
            }
            match self.registry.get_component_constructor(&rname.subtype) {
                Ok(constructor) => {
                    manager.register(constructor(rname.name.clone(), self.channel.clone()))
                }
                Err(_) => log::warn!("component of type {} is not implemented", rname.subtype),
            }
        }
        let mut state = self.state.lock().unwrap();
        state.resource_names = resource_names;
        // only install when the component set actually changed
        if manager.component_names() != state.manager.component_names() {
            state.manager = Rc::new(manager);
        }
        Ok(())
    }
}

/// gRPC client for a robot. This struct should be used for all interactions
/// with a robot.
///
/// There are 2 ways to instantiate a robot client:
///
/// ```text
/// RobotClient::at_address(...)
/// RobotClient::with_channel(...)
/// ```
///
/// You must [`close`](RobotClient::close) the robot to release resources.
/// Clients created with `with_channel` never close the channel they were
/// handed; the caller stays responsible for it.
pub struct RobotClient {
    inner: Rc<RobotInner>,
    refresh_task: Option<Task<()>>,
    should_close_channel: bool,
}

impl RobotClient {
    /// Create a robot client connected to the robot at the provided address,
    /// owning the resulting channel.
    ///
    /// Fails if dialing fails or the first resource discovery pass fails;
    /// no partially connected client is ever returned.
    pub async fn at_address(
        address: &str,
        dial_options: &DialOptions,
        registry: ClientRegistry,
        options: RobotClientOptions,
        executor: Executor,
    ) -> Result<Self, RobotClientError> {
        let channel = dial(address, dial_options, executor.clone()).await?;
        let mut robot = Self::with_channel(channel, registry, options, executor).await?;
        robot.should_close_channel = true;
        Ok(robot)
    }

    /// Create a robot client over an already connected channel.
    ///
    /// Robots created using this method will *NOT* close the channel upon
    /// [`close`](RobotClient::close).
    pub async fn with_channel(
        channel: Channel,
        registry: ClientRegistry,
        options: RobotClientOptions,
        executor: Executor,
    ) -> Result<Self, RobotClientError> {
        let inner = Rc::new(RobotInner {
            channel,
            registry,
            state: Mutex::new(RobotState {
                resource_names: Vec::new(),
                manager: Rc::new(ResourceManager::default()),
            }),
        });

        inner.refresh().await?;

        let refresh_task = (options.refresh_interval > Duration::ZERO).then(|| {
            let inner = inner.clone();
            let interval = options.refresh_interval;
            executor.spawn(async move {
                loop {
                    Timer::after(interval).await;
                    if let Err(e) = inner.refresh().await {
                        log::error!("failed to refresh robot resources: {:?}", e);
                    }
                }
            })
        });

        Ok(Self {
            inner,
            refresh_task,
            should_close_channel: false,
        })
    }

    /// Manually re-run resource discovery against the robot.
    pub async fn refresh(&self) -> Result<(), RobotClientError> {
        self.inner.refresh().await
    }

    /// Get a component by its [`ResourceName`], downcast to the concrete
    /// client type `T`.
    ///
    /// ```no_run
    /// # use viam_client::common::motor::MotorClient;
    /// # fn get(robot: &viam_client::common::robot_client::RobotClient) {
    /// let motor: MotorClient = robot
    ///     .get_component(&MotorClient::resource_name("my_motor"))
    ///     .unwrap();
    /// # }
    /// ```
    pub fn get_component<T>(&self, name: &ResourceName) -> Result<T, RobotClientError>
    where
        T: ComponentClient + Clone + 'static,
    {
        if name.r#type != COMPONENT_TYPE {
            return Err(RobotClientError::NotAComponent(format!("{:?}", name)));
        }
        let state = self.inner.state.lock().unwrap();
        let component = state
            .manager
            .get_component(&name.name)
            .ok_or_else(|| RobotClientError::ComponentNotFound(name.name.clone()))?;
        component
            .as_any()
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| RobotClientError::ComponentTypeMismatch(name.name.clone()))
    }

    /// Get a service client by its type.
    ///
    /// The client is constructed anew on every call and bound to the shared
    /// channel; fails if the robot does not advertise the service.
    pub fn get_service<S: ServiceClient>(&self) -> Result<S, RobotClientError> {
        let state = self.inner.state.lock().unwrap();
        if state
            .resource_names
            .iter()
            .any(|rn| rn.r#type == SERVICE_TYPE && rn.subtype == S::SUBTYPE)
        {
            return Ok(S::from_channel(self.inner.channel.clone()));
        }
        Err(RobotClientError::ServiceNotImplemented(S::SUBTYPE))
    }

    /// All resource names the robot reported on the last discovery pass,
    /// as a copy safe for the caller to hold onto.
    pub fn resource_names(&self) -> Vec<ResourceName> {
        self.inner.state.lock().unwrap().resource_names.clone()
    }

    /// The configuration of the robot's frame system.
    pub async fn get_frame_system_config(
        &self,
        supplemental_transforms: Vec<Transform>,
    ) -> Result<Vec<FrameSystemConfig>, RobotClientError> {
        let req = FrameSystemConfigRequest {
            supplemental_transforms,
        };
        let response: FrameSystemConfigResponse = call_unary(
            self.inner.channel.as_ref(),
            "/viam.robot.v1.RobotService/FrameSystemConfig",
            req,
        )
        .await?;
        Ok(response.frame_system_configs)
    }

    /// Transform `query` from its reference frame to the `destination`
    /// reference frame.
    pub async fn transform_pose(
        &self,
        query: PoseInFrame,
        destination: &str,
        supplemental_transforms: Vec<Transform>,
    ) -> Result<PoseInFrame, RobotClientError> {
        let req = TransformPoseRequest {
            source: Some(query),
            destination: destination.to_owned(),
            supplemental_transforms,
        };
        let response: TransformPoseResponse = call_unary(
            self.inner.channel.as_ref(),
            "/viam.robot.v1.RobotService/TransformPose",
            req,
        )
        .await?;
        Ok(response.pose.unwrap_or_default())
    }

    /// Cleanly stop the periodic refresh task and, when this client dialed
    /// its own channel, tear the channel down.
    pub async fn close(&mut self) {
        log::debug!("closing RobotClient");
        if let Some(task) = self.refresh_task.take() {
            let _ = task.cancel().await;
        }
        if self.should_close_channel {
            log::debug!("closing gRPC channel to remote robot");
            self.inner.channel.close().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::time::Duration;

    use async_io::Timer;

    use super::{RobotClient, RobotClientError, RobotClientOptions};
    use crate::common::arm::ArmClient;
    use crate::common::exec::Executor;
    use crate::common::grpc_client::test_channel::FakeChannel;
    use crate::common::grpc_client::Channel;
    use crate::common::motor::MotorClient;
    use crate::common::registry::ClientRegistry;
    use crate::common::service::{GenericServiceClient, ServiceClient};
    use crate::proto::common::v1::{Pose, PoseInFrame, ResourceName, Transform};
    use crate::proto::robot::v1::{
        FrameSystemConfig, FrameSystemConfigResponse, ResourceNamesResponse, TransformPoseRequest,
        TransformPoseResponse,
    };

    static RESOURCE_NAMES: &str = "/viam.robot.v1.RobotService/ResourceNames";

    fn rname(r#type: &str, subtype: &str, name: &str) -> ResourceName {
        ResourceName {
            namespace: "rdk".to_owned(),
            r#type: r#type.to_owned(),
            subtype: subtype.to_owned(),
            name: name.to_owned(),
        }
    }

    fn push_names(fake: &FakeChannel, names: &[ResourceName]) {
        fake.push_response(
            RESOURCE_NAMES,
            ResourceNamesResponse {
                resources: names.to_vec(),
            },
        );
    }

    async fn robot_with(
        fake: &Rc<FakeChannel>,
        registry: ClientRegistry,
        options: RobotClientOptions,
    ) -> Result<RobotClient, RobotClientError> {
        let channel: Channel = fake.clone();
        RobotClient::with_channel(channel, registry, options, Executor::new()).await
    }

    #[test_log::test]
    fn test_initial_refresh() {
        let exec = Executor::new();
        let fake = Rc::new(FakeChannel::new());
        push_names(
            &fake,
            &[
                rname("component", "motor", "m1"),
                rname("component", "arm", "a1"),
                rname("service", "generic", "g"),
            ],
        );
        exec.block_on(async {
            let robot = robot_with(&fake, ClientRegistry::default(), Default::default())
                .await
                .unwrap();
            assert_eq!(robot.resource_names().len(), 3);
            let motor: MotorClient = robot
                .get_component(&MotorClient::resource_name("m1"))
                .unwrap();
            assert_eq!(crate::common::component::ComponentClient::name(&motor), "m1");
            let _arm: ArmClient = robot
                .get_component(&ArmClient::resource_name("a1"))
                .unwrap();
        });
    }

    #[test_log::test]
    fn test_initial_refresh_failure_aborts_construction() {
        let exec = Executor::new();
        // no canned discovery response, the RPC fails
        let fake = Rc::new(FakeChannel::new());
        exec.block_on(async {
            let robot = robot_with(&fake, ClientRegistry::default(), Default::default()).await;
            assert!(matches!(robot, Err(RobotClientError::RpcError(_))));
        });
    }

    #[test_log::test]
    fn test_remote_components_are_skipped() {
        let exec = Executor::new();
        let fake = Rc::new(FakeChannel::new());
        push_names(
            &fake,
            &[
                rname("component", "arm", "arm1"),
                rname("component", "remote", "other-robot"),
            ],
        );
        exec.block_on(async {
            let robot = robot_with(&fake, ClientRegistry::default(), Default::default())
                .await
                .unwrap();
            // the remote stays visible in the name list but gets no proxy
            assert_eq!(robot.resource_names().len(), 2);
            assert!(robot
                .get_component::<ArmClient>(&ArmClient::resource_name("arm1"))
                .is_ok());
            let err = robot
                .get_component::<ArmClient>(&rname("component", "remote", "other-robot"))
                .err()
                .unwrap();
            assert!(matches!(err, RobotClientError::ComponentNotFound(_)));
        });
    }

    #[test_log::test]
    fn test_unknown_subtype_is_skipped() {
        let exec = Executor::new();
        let fake = Rc::new(FakeChannel::new());
        push_names(&fake, &[rname("component", "gripper", "g1")]);
        exec.block_on(async {
            // an empty registry knows no gripper; refresh must still succeed
            let robot = robot_with(&fake, ClientRegistry::new(), Default::default())
                .await
                .unwrap();
            assert_eq!(robot.resource_names().len(), 1);
            let err = robot
                .get_component::<crate::common::gripper::GripperClient>(
                    &crate::common::gripper::GripperClient::resource_name("g1"),
                )
                .err()
                .unwrap();
            assert!(matches!(err, RobotClientError::ComponentNotFound(_)));
        });
    }

    #[test_log::test]
    fn test_refresh_short_circuit_keeps_manager() {
        let exec = Executor::new();
        let fake = Rc::new(FakeChannel::new());
        let names = [rname("component", "motor", "m1")];
        push_names(&fake, &names);
        push_names(&fake, &names);
        exec.block_on(async {
            let robot = robot_with(&fake, ClientRegistry::default(), Default::default())
                .await
                .unwrap();
            let before = robot.inner.state.lock().unwrap().manager.clone();
            robot.refresh().await.unwrap();
            let after = robot.inner.state.lock().unwrap().manager.clone();
            assert!(Rc::ptr_eq(&before, &after));
        });
    }

    #[test_log::test]
    fn test_refresh_swaps_manager_on_component_change() {
        let exec = Executor::new();
        let fake = Rc::new(FakeChannel::new());
        push_names(&fake, &[rname("component", "motor", "m1")]);
        push_names(
            &fake,
            &[
                rname("component", "motor", "m1"),
                rname("component", "motor", "m2"),
            ],
        );
        exec.block_on(async {
            let robot = robot_with(&fake, ClientRegistry::default(), Default::default())
                .await
                .unwrap();
            let before = robot.inner.state.lock().unwrap().manager.clone();
            robot.refresh().await.unwrap();
            let after = robot.inner.state.lock().unwrap().manager.clone();
            assert!(!Rc::ptr_eq(&before, &after));
            assert!(robot
                .get_component::<MotorClient>(&MotorClient::resource_name("m2"))
                .is_ok());
        });
    }

    #[test_log::test]
    fn test_refresh_keeps_manager_when_components_unchanged() {
        let exec = Executor::new();
        let fake = Rc::new(FakeChannel::new());
        push_names(&fake, &[rname("component", "motor", "m1")]);
        // a service appears: the name list changes but the component set
        // does not
        push_names(
            &fake,
            &[
                rname("component", "motor", "m1"),
                rname("service", "generic", "g"),
            ],
        );
        exec.block_on(async {
            let robot = robot_with(&fake, ClientRegistry::default(), Default::default())
                .await
                .unwrap();
            assert!(robot.get_service::<GenericServiceClient>().is_err());
            let before = robot.inner.state.lock().unwrap().manager.clone();
            robot.refresh().await.unwrap();
            let after = robot.inner.state.lock().unwrap().manager.clone();
            assert!(Rc::ptr_eq(&before, &after));
            assert!(robot.get_service::<GenericServiceClient>().is_ok());
        });
    }

    #[test_log::test]
    fn test_get_component_rejects_non_component_names() {
        let exec = Executor::new();
        let fake = Rc::new(FakeChannel::new());
        push_names(&fake, &[rname("component", "motor", "m1")]);
        exec.block_on(async {
            let robot = robot_with(&fake, ClientRegistry::default(), Default::default())
                .await
                .unwrap();
            let err = robot
                .get_component::<MotorClient>(&rname("service", "motor", "m1"))
                .err()
                .unwrap();
            assert!(matches!(err, RobotClientError::NotAComponent(_)));
        });
    }

    #[test_log::test]
    fn test_get_component_type_mismatch() {
        let exec = Executor::new();
        let fake = Rc::new(FakeChannel::new());
        push_names(&fake, &[rname("component", "motor", "m1")]);
        exec.block_on(async {
            let robot = robot_with(&fake, ClientRegistry::default(), Default::default())
                .await
                .unwrap();
            // "m1" resolves to a motor proxy, not an arm
            let err = robot
                .get_component::<ArmClient>(&rname("component", "arm", "m1"))
                .err()
                .unwrap();
            assert!(matches!(err, RobotClientError::ComponentTypeMismatch(_)));
        });
    }

    #[test_log::test]
    fn test_get_service() {
        let exec = Executor::new();
        let fake = Rc::new(FakeChannel::new());
        push_names(
            &fake,
            &[
                rname("service", "generic", "g"),
                rname("component", "motor", "m1"),
            ],
        );
        exec.block_on(async {
            let robot = robot_with(&fake, ClientRegistry::default(), Default::default())
                .await
                .unwrap();
            assert!(robot.get_service::<GenericServiceClient>().is_ok());

            struct NavServiceClient;
            impl ServiceClient for NavServiceClient {
                const SUBTYPE: &'static str = "navigation";
                fn from_channel(_channel: Channel) -> Self {
                    Self
                }
            }
            let err = robot.get_service::<NavServiceClient>().err().unwrap();
            assert!(matches!(
                err,
                RobotClientError::ServiceNotImplemented("navigation")
            ));
        });
    }

    #[test_log::test]
    fn test_resource_names_returns_a_copy() {
        let exec = Executor::new();
        let fake = Rc::new(FakeChannel::new());
        push_names(&fake, &[rname("component", "motor", "m1")]);
        exec.block_on(async {
            let robot = robot_with(&fake, ClientRegistry::default(), Default::default())
                .await
                .unwrap();
            let mut names = robot.resource_names();
            names.push(rname("component", "motor", "bogus"));
            assert_eq!(robot.resource_names().len(), 1);
        });
    }

    #[test_log::test]
    fn test_close_channel_ownership() {
        let exec = Executor::new();
        let fake = Rc::new(FakeChannel::new());
        push_names(&fake, &[]);
        push_names(&fake, &[]);
        exec.block_on(async {
            // adopted channel: close leaves it open
            let mut robot = robot_with(&fake, ClientRegistry::default(), Default::default())
                .await
                .unwrap();
            robot.close().await;
            assert!(!fake.is_closed());

            // owned channel (the dial path flips this flag): close tears it
            // down
            let mut robot = robot_with(&fake, ClientRegistry::default(), Default::default())
                .await
                .unwrap();
            robot.should_close_channel = true;
            robot.close().await;
            assert!(fake.is_closed());
        });
    }

    #[test_log::test]
    fn test_periodic_refresh_and_close() {
        let exec = Executor::new();
        let fake = Rc::new(FakeChannel::new());
        push_names(&fake, &[rname("component", "motor", "m1")]);
        push_names(
            &fake,
            &[
                rname("component", "motor", "m1"),
                rname("component", "motor", "m2"),
            ],
        );
        exec.block_on(async {
            let mut robot = robot_with(
                &fake,
                ClientRegistry::default(),
                RobotClientOptions {
                    refresh_interval: Duration::from_millis(10),
                },
            )
            .await
            .unwrap();
            assert!(robot
                .get_component::<MotorClient>(&MotorClient::resource_name("m2"))
                .is_err());

            // let the periodic task pick up the second discovery result;
            // later ticks fail (queue drained) and must keep the loop alive
            Timer::after(Duration::from_millis(100)).await;
            assert!(robot
                .get_component::<MotorClient>(&MotorClient::resource_name("m2"))
                .is_ok());

            robot.close().await;
            let calls = fake.request_paths().len();
            Timer::after(Duration::from_millis(50)).await;
            assert_eq!(fake.request_paths().len(), calls);
        });
    }

    #[test_log::test]
    fn test_frame_system_passthrough() {
        let exec = Executor::new();
        let fake = Rc::new(FakeChannel::new());
        push_names(&fake, &[]);
        fake.push_response(
            "/viam.robot.v1.RobotService/FrameSystemConfig",
            FrameSystemConfigResponse {
                frame_system_configs: vec![FrameSystemConfig {
                    frame: Some(Transform {
                        reference_frame: "arm".to_owned(),
                        pose_in_observer_frame: None,
                    }),
                    kinematics: None,
                }],
            },
        );
        fake.push_response(
            "/viam.robot.v1.RobotService/TransformPose",
            TransformPoseResponse {
                pose: Some(PoseInFrame {
                    reference_frame: "world".to_owned(),
                    pose: Some(Pose {
                        x: 1.0,
                        ..Default::default()
                    }),
                }),
            },
        );
        exec.block_on(async {
            let robot = robot_with(&fake, ClientRegistry::default(), Default::default())
                .await
                .unwrap();

            let configs = robot.get_frame_system_config(Vec::new()).await.unwrap();
            assert_eq!(configs.len(), 1);
            assert_eq!(configs[0].frame.as_ref().unwrap().reference_frame, "arm");

            let pose = robot
                .transform_pose(
                    PoseInFrame {
                        reference_frame: "gripper".to_owned(),
                        pose: Some(Pose::default()),
                    },
                    "world",
                    Vec::new(),
                )
                .await
                .unwrap();
            assert_eq!(pose.reference_frame, "world");
            assert_eq!(pose.pose.unwrap().x, 1.0);

            // the request carried the destination frame through unchanged
            let req: TransformPoseRequest = fake.request_message(2);
            assert_eq!(req.destination, "world");
            assert_eq!(req.source.unwrap().reference_frame, "gripper");
        });
    }
}
