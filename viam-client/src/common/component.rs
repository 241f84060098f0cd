use std::any::Any;
use std::rc::Rc;

use crate::proto::common::v1::ResourceName;

/// Base capability shared by every component client proxy. Concrete
/// proxies are recovered from a shared handle with [`ComponentClient::as_any`].
pub trait ComponentClient {
    /// The user-assigned instance name of the remote component.
    fn name(&self) -> &str;
    /// Supports downcasting a shared handle to the concrete proxy type.
    fn as_any(&self) -> &dyn Any;
}

/// Shared handle to a component client proxy.
pub type ComponentType = Rc<dyn ComponentClient>;

pub(crate) fn component_resource_name(subtype: &str, name: &str) -> ResourceName {
    ResourceName {
        namespace: "rdk".to_owned(),
        r#type: "component".to_owned(),
        subtype: subtype.to_owned(),
        name: name.to_owned(),
    }
}
