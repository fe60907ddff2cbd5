use anyhow::Result;

/// Process-wide graphics subsystem.
///
/// Owns the wgpu `Instance` every surface and adapter is created from.
/// Dropping it after all surfaces releases the backend.
pub struct GpuInstance {
    instance: wgpu::Instance,
}

impl GpuInstance {
    pub fn new() -> Result<Self> {
        let available = wgpu::Instance::enabled_backend_features();
        anyhow::ensure!(!available.is_empty(), "no graphics backend was compiled in");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        log::debug!("graphics subsystem ready: backends={available:?}");
        Ok(Self { instance })
    }

    pub fn instance(&self) -> &wgpu::Instance {
        &self.instance
    }
}

impl Drop for GpuInstance {
    fn drop(&mut self) {
        log::debug!("graphics subsystem released");
    }
}
