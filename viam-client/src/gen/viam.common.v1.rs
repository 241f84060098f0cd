// @generated
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResourceName {
    #[prost(string, tag="1")]
    pub namespace: ::prost::alloc::string::String,
    #[prost(string, tag="2")]
    pub r#type: ::prost::alloc::string::String,
    #[prost(string, tag="3")]
    pub subtype: ::prost::alloc::string::String,
    #[prost(string, tag="4")]
    pub name: ::prost::alloc::string::String,
}
/// Pose is a combination of location and orientation.
/// Location is expressed as distance which is represented by x , y, z coordinates. Orientation is expressed as an orientation vector which
/// is represented by o_x, o_y, o_z and theta. The o_x, o_y, o_z coordinates represent the point on the cartesian unit sphere that the end of
/// the arrow tip of the vector would touch. The theta represents the rotation around that vector in degrees.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Pose {
    /// millimeters from the origin
    #[prost(double, tag="1")]
    pub x: f64,
    /// millimeters from the origin
    #[prost(double, tag="2")]
    pub y: f64,
    /// millimeters from the origin
    #[prost(double, tag="3")]
    pub z: f64,
    /// z component of a vector defining axis of rotation
    #[prost(double, tag="4")]
    pub o_x: f64,
    /// x component of a vector defining axis of rotation
    #[prost(double, tag="5")]
    pub o_y: f64,
    /// y component of a vector defining axis of rotation
    #[prost(double, tag="6")]
    pub o_z: f64,
    /// degrees
    #[prost(double, tag="7")]
    pub theta: f64,
}
/// PoseInFrame contains a pose and the and the reference frame in which it was observed
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PoseInFrame {
    #[prost(string, tag="1")]
    pub reference_frame: ::prost::alloc::string::String,
    #[prost(message, optional, tag="2")]
    pub pose: ::core::option::Option<Pose>,
}
/// Transform contains a pose and two reference frames
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Transform {
    /// the name of a given reference frame
    #[prost(string, tag="1")]
    pub reference_frame: ::prost::alloc::string::String,
    /// the pose of the above reference frame with respect to a different observer reference frame
    #[prost(message, optional, tag="2")]
    pub pose_in_observer_frame: ::core::option::Option<PoseInFrame>,
}
/// DoCommandRequest represents a generic DoCommand input
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DoCommandRequest {
    #[prost(string, tag="1")]
    pub name: ::prost::alloc::string::String,
    #[prost(message, optional, tag="2")]
    pub command: ::core::option::Option<super::super::super::google::protobuf::Struct>,
}
/// DoCommandResponse represents a generic DoCommand output
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DoCommandResponse {
    #[prost(message, optional, tag="1")]
    pub result: ::core::option::Option<super::super::super::google::protobuf::Struct>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetReadingsRequest {
    /// Name of a sensor
    #[prost(string, tag="1")]
    pub name: ::prost::alloc::string::String,
    /// Additional arguments to the method
    #[prost(message, optional, tag="99")]
    pub extra: ::core::option::Option<super::super::super::google::protobuf::Struct>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetReadingsResponse {
    #[prost(map="string, message", tag="1")]
    pub readings: ::std::collections::HashMap<::prost::alloc::string::String, super::super::super::google::protobuf::Value>,
}
// @@protoc_insertion_point(module)
