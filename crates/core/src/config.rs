//! Build-target feature configuration.
//!
//! Each embedding host historically selected one build variant through a
//! table of preprocessor flags. Here the whole table is one immutable
//! value constructed once at startup and handed to the components that
//! need it: the allocator reads `host_allocator`, the rendering engine
//! reads the rest. Exactly-one-processing-domain is encoded in the
//! [`ProcessingDomain`] type instead of being a runtime invariant to check.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Convolution processing domain. Each build variant uses exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessingDomain {
    /// Frequency-domain (spectral) convolution
    Frequency,
    /// Time-domain convolution
    Time,
}

/// The embedding hosts the engine ships for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineTarget {
    /// Wwise plug-in (host-delegated allocation)
    Wwise,
    /// Unity native audio plug-in
    Unity,
    /// VST3 plug-in
    Vst3,
    /// Standalone SDK distribution
    Sdk,
    /// Internal test build, frequency domain
    TestFreq,
    /// Internal test build, time domain
    TestTime,
    /// Fallback when no target is specified
    Generic,
}

/// Immutable per-build feature set.
///
/// Constructed once from an [`EngineTarget`] and threaded through the
/// engine; nothing here changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Which convolution domain this build renders in
    pub domain: ProcessingDomain,
    /// SIMD block processing enabled
    pub simd: bool,
    /// Forward allocations to the host instead of the platform allocator
    pub host_allocator: bool,
    /// Distance-based gain decay
    pub distance_decay: bool,
    /// Timbre correction filter stage
    pub timbre_correction: bool,
    /// External HRTF pack loading
    pub hrtf_pack: bool,
    /// Runtime HRTF selection
    pub hrtf_selector: bool,
    /// License authentication gating
    pub auth: bool,
}

impl EngineConfig {
    /// Resolve the feature table for one target. The rows reproduce the
    /// shipped per-host build configurations.
    pub fn for_target(target: EngineTarget) -> Self {
        let config = match target {
            EngineTarget::Wwise => EngineConfig {
                domain: ProcessingDomain::Frequency,
                simd: true,
                host_allocator: true,
                distance_decay: false,
                timbre_correction: false,
                hrtf_pack: false,
                hrtf_selector: false,
                auth: false,
            },
            EngineTarget::Unity => EngineConfig {
                domain: ProcessingDomain::Frequency,
                simd: true,
                host_allocator: false,
                distance_decay: false,
                timbre_correction: false,
                hrtf_pack: false,
                hrtf_selector: false,
                auth: false,
            },
            EngineTarget::Vst3 => EngineConfig {
                domain: ProcessingDomain::Time,
                simd: true,
                host_allocator: false,
                distance_decay: true,
                timbre_correction: true,
                hrtf_pack: true,
                hrtf_selector: true,
                auth: true,
            },
            EngineTarget::Sdk => EngineConfig {
                domain: ProcessingDomain::Frequency,
                simd: true,
                host_allocator: false,
                distance_decay: true,
                timbre_correction: true,
                hrtf_pack: false,
                hrtf_selector: false,
                auth: true,
            },
            EngineTarget::TestFreq => EngineConfig {
                domain: ProcessingDomain::Frequency,
                simd: true,
                host_allocator: false,
                distance_decay: true,
                timbre_correction: true,
                hrtf_pack: true,
                hrtf_selector: true,
                auth: true,
            },
            EngineTarget::TestTime => EngineConfig {
                domain: ProcessingDomain::Time,
                simd: true,
                host_allocator: false,
                distance_decay: true,
                timbre_correction: true,
                hrtf_pack: true,
                hrtf_selector: true,
                auth: true,
            },
            EngineTarget::Generic => EngineConfig {
                domain: ProcessingDomain::Time,
                simd: true,
                host_allocator: false,
                distance_decay: true,
                timbre_correction: true,
                hrtf_pack: true,
                hrtf_selector: true,
                auth: false,
            },
        };
        info!(?target, ?config.domain, "resolved engine configuration");
        config
    }
}
