//! A gRPC client SDK for Viam robots.
//!
//! The entry point is [`common::robot_client::RobotClient`]: it dials (or
//! adopts) an HTTP/2 channel to a robot, discovers the components and
//! services the robot exposes, and hands out typed client proxies for them.
//!
//! ```no_run
//! use viam_client::common::exec::Executor;
//! use viam_client::common::dial::DialOptions;
//! use viam_client::common::motor::MotorClient;
//! use viam_client::common::registry::ClientRegistry;
//! use viam_client::common::robot_client::{RobotClient, RobotClientOptions};
//!
//! let exec = Executor::new();
//! exec.clone().block_on(async move {
//!     let options = RobotClientOptions::default();
//!     let mut robot = RobotClient::at_address(
//!         "http://localhost:8080",
//!         &DialOptions::default(),
//!         ClientRegistry::default(),
//!         options,
//!         exec,
//!     )
//!     .await
//!     .unwrap();
//!     let motor: MotorClient = robot
//!         .get_component(&MotorClient::resource_name("m1"))
//!         .unwrap();
//!     motor.set_power(0.5).await.unwrap();
//!     robot.close().await;
//! });
//! ```

pub mod common;

/// gRPC protobuf utilities, auto-generated
pub mod google {
    pub mod protobuf {
        #![allow(clippy::derive_partial_eq_without_eq)]
        include!("gen/google.protobuf.rs");
    }
}

/// gRPC prototypes from definitions in [api repository](https://github.com/viamrobotics/api/tree/main/proto/viam), auto-generated
pub mod proto {

    // Don't bother to clippy generated proto code
    #![allow(clippy::all)]

    pub mod common {
        pub mod v1 {
            include!("gen/viam.common.v1.rs");
        }
    }

    pub mod robot {
        pub mod v1 {
            include!("gen/viam.robot.v1.rs");
        }
    }

    pub mod component {
        pub mod arm {
            pub mod v1 {
                include!("gen/viam.component.arm.v1.rs");
            }
        }
        pub mod gripper {
            pub mod v1 {
                include!("gen/viam.component.gripper.v1.rs");
            }
        }
        pub mod motor {
            pub mod v1 {
                include!("gen/viam.component.motor.v1.rs");
            }
        }
    }
}
