//! Device selection for token tensors.
//!
//! Token ids are handed to the model as `candle_core` tensors, so they have to
//! live on the same device as the model weights.

use anyhow::{anyhow, bail, Result};
use candle_core::Device;
use std::str::FromStr;

/// A device request, as written on the command line or in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceSpec {
    /// Best available backend, see [`auto_device`]
    Auto,
    Cpu,
    /// CUDA device with the given ordinal
    Cuda(usize),
    Metal,
}

impl FromStr for DeviceSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.to_lowercase();
        match s.as_str() {
            "auto" => Ok(DeviceSpec::Auto),
            "cpu" => Ok(DeviceSpec::Cpu),
            "cuda" => Ok(DeviceSpec::Cuda(0)),
            "metal" => Ok(DeviceSpec::Metal),
            other => match other.strip_prefix("cuda:") {
                Some(idx) => idx
                    .parse()
                    .map(DeviceSpec::Cuda)
                    .map_err(|e| anyhow!("invalid CUDA device index '{idx}': {e}")),
                None => bail!("unknown device '{other}'. Supported: auto, cpu, cuda, cuda:N, metal"),
            },
        }
    }
}

impl DeviceSpec {
    /// Initialize the requested backend.
    ///
    /// Fails if the backend wasn't compiled in or the hardware can't be opened.
    pub fn resolve(self) -> Result<Device> {
        match self {
            DeviceSpec::Auto => auto_device(),
            DeviceSpec::Cpu => Ok(Device::Cpu),
            DeviceSpec::Cuda(ordinal) => {
                #[cfg(feature = "cuda")]
                {
                    Device::cuda_if_available(ordinal)
                        .map_err(|e| anyhow!("failed to init CUDA device {ordinal}: {e}"))
                }
                #[cfg(not(feature = "cuda"))]
                bail!(
                    "CUDA device {ordinal} requested but CUDA support is not compiled in. Rebuild with: cargo build --features cuda"
                )
            }
            DeviceSpec::Metal => {
                #[cfg(feature = "metal")]
                {
                    Device::new_metal(0).map_err(|e| anyhow!("failed to init Metal device: {e}"))
                }
                #[cfg(not(feature = "metal"))]
                bail!("Metal support not compiled in. Rebuild with: cargo build --features metal")
            }
        }
    }
}

/// Select the best available device: CUDA, then Metal, then CPU.
pub fn auto_device() -> Result<Device> {
    #[cfg(feature = "cuda")]
    {
        if let Ok(device) = Device::cuda_if_available(0) {
            if device.is_cuda() {
                tracing::debug!("Token tensors on CUDA device");
                return Ok(device);
            }
        }
    }

    #[cfg(feature = "metal")]
    {
        if let Ok(device) = Device::new_metal(0) {
            tracing::debug!("Token tensors on Metal device");
            return Ok(device);
        }
    }

    tracing::debug!("Token tensors on CPU");
    Ok(Device::Cpu)
}

/// Parse and initialize a device from a string such as `"cpu"` or `"cuda:1"`.
pub fn parse_device(device_str: &str) -> Result<Device> {
    device_str.parse::<DeviceSpec>()?.resolve()
}

/// Human-readable label for a [`Device`].
pub fn device_info(device: &Device) -> String {
    match device {
        Device::Cpu => "CPU".to_string(),
        Device::Cuda(_) => "CUDA".to_string(),
        Device::Metal(_) => "Metal".to_string(),
    }
}
