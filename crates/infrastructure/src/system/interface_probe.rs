use xdns_application::ports::InterfaceProbe;

/// Probes interfaces by name through the kernel's name-to-index lookup.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemInterfaceProbe;

impl SystemInterfaceProbe {
    pub fn new() -> Self {
        Self
    }
}

impl InterfaceProbe for SystemInterfaceProbe {
    #[cfg(unix)]
    fn is_present(&self, interface: &str) -> bool {
        let Ok(name) = std::ffi::CString::new(interface) else {
            return false;
        };
        // SAFETY: `name` is a valid NUL-terminated string for the duration of the call.
        let index = unsafe { libc::if_nametoindex(name.as_ptr()) };
        index != 0
    }

    #[cfg(not(unix))]
    fn is_present(&self, _interface: &str) -> bool {
        false
    }
}
