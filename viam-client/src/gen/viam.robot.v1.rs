// @generated
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FrameSystemConfig {
    /// this is an experimental API message
    #[prost(message, optional, tag="1")]
    pub frame: ::core::option::Option<super::super::common::v1::Transform>,
    #[prost(message, optional, tag="2")]
    pub kinematics: ::core::option::Option<super::super::super::google::protobuf::Struct>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FrameSystemConfigRequest {
    /// pose information on any additional reference frames that are needed
    /// to supplement the robot's frame system
    #[prost(message, repeated, tag="1")]
    pub supplemental_transforms: ::prost::alloc::vec::Vec<super::super::common::v1::Transform>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FrameSystemConfigResponse {
    #[prost(message, repeated, tag="1")]
    pub frame_system_configs: ::prost::alloc::vec::Vec<FrameSystemConfig>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransformPoseRequest {
    /// the original pose to transform along with the reference frame in
    /// which it was observed
    #[prost(message, optional, tag="1")]
    pub source: ::core::option::Option<super::super::common::v1::PoseInFrame>,
    /// the reference frame into which the source pose should be transformed,
    /// if unset this defaults to the "world" reference frame
    #[prost(string, tag="2")]
    pub destination: ::prost::alloc::string::String,
    /// pose information on any additional reference frames that are needed
    /// to perform the transform
    #[prost(message, repeated, tag="3")]
    pub supplemental_transforms: ::prost::alloc::vec::Vec<super::super::common::v1::Transform>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransformPoseResponse {
    #[prost(message, optional, tag="1")]
    pub pose: ::core::option::Option<super::super::common::v1::PoseInFrame>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResourceNamesRequest {
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResourceNamesResponse {
    #[prost(message, repeated, tag="1")]
    pub resources: ::prost::alloc::vec::Vec<super::super::common::v1::ResourceName>,
}
// @@protoc_insertion_point(module)
