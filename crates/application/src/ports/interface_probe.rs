/// Port for checking whether a network interface currently exists.
pub trait InterfaceProbe: Send + Sync {
    fn is_present(&self, interface: &str) -> bool;
}
