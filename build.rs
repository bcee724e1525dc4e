use std::cmp::Ordering;
use std::env;
use std::process::Command;

// Environment variable used to force a backend
const BACKEND_OVERRIDE_VAR: &str = "SIMD4D_BACKEND";

// Every cfg flag this build script may emit
const BACKEND_CFG_FLAGS: [&str; 5] = ["avx", "sse4", "sse2", "neon", "fallback"];

// CPU features we want to detect
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    target_feature: &'static str,
    cfg_flag: &'static str,
    arch: &'static [&'static str],
    // Reported by the host CPU
    detected: bool,
    // Enabled for the compilation, so the intrinsics inline
    enabled: bool,
}

impl CpuFeature {
    // Define priority order between CPU Features (Lowest number == Highest Priority)
    fn priority(&self) -> usize {
        match self.name {
            "avx" => 0,
            "sse4_1" => 1,
            "sse2" => 2,
            "neon" => 3,
            _ => usize::MAX, // lowest priority by default
        }
    }

    // Groups all CPU features that select a backend of this crate
    fn features() -> Vec<CpuFeature> {
        vec![
            CpuFeature {
                name: "avx",
                target_feature: "avx",
                cfg_flag: "avx",
                arch: &["x86", "x86_64"],
                detected: false,
                enabled: false,
            },
            CpuFeature {
                name: "sse4_1",
                target_feature: "sse4.1",
                cfg_flag: "sse4",
                arch: &["x86", "x86_64"],
                detected: false,
                enabled: false,
            },
            CpuFeature {
                name: "sse2",
                target_feature: "sse2",
                cfg_flag: "sse2",
                arch: &["x86", "x86_64"],
                detected: false,
                enabled: false,
            },
            CpuFeature {
                name: "neon",
                target_feature: "neon",
                cfg_flag: "neon",
                arch: &["aarch64"],
                detected: false,
                enabled: false,
            },
        ]
    }

    fn supports_arch(&self, target_arch: &str) -> bool {
        self.arch.contains(&target_arch)
    }
}

impl Ord for CpuFeature {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl PartialOrd for CpuFeature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Feature detection trait to make implementations more modular
trait CpuFeatureDetector {
    fn detect_features(&self, features: &mut [CpuFeature]);
    fn is_applicable(&self) -> bool;
}

// Linux CPU feature detector
struct LinuxDetector;
impl CpuFeatureDetector for LinuxDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        if let Ok(cpuinfo) = std::fs::read_to_string("/proc/cpuinfo") {
            let contents = cpuinfo.to_lowercase();
            let flags: Vec<&str> = contents
                .lines()
                .filter(|line| line.starts_with("flags") || line.starts_with("features"))
                .flat_map(|line| line.split_whitespace())
                .collect();

            for feature in features.iter_mut() {
                // aarch64 kernels report NEON as "asimd"
                feature.detected |= match feature.name {
                    "neon" => flags.contains(&"asimd") || flags.contains(&"neon"),
                    name => flags.contains(&name),
                };
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "linux")
    }
}

// macOS CPU feature detector
struct MacOSDetector;
impl CpuFeatureDetector for MacOSDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        let output = Command::new("sysctl").args(["-a"]).output();

        if let Ok(output) = output {
            let contents = String::from_utf8_lossy(&output.stdout).to_lowercase();

            for feature in features.iter_mut() {
                match feature.name {
                    "avx" => feature.detected |= contents.contains("hw.optional.avx1_0: 1"),
                    "sse4_1" => feature.detected |= contents.contains("hw.optional.sse4_1: 1"),
                    "sse2" => feature.detected |= contents.contains("hw.optional.sse2: 1"),
                    "neon" => feature.detected |= contents.contains("hw.optional.neon: 1"),
                    _ => {}
                }
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "macos")
    }
}

// Target features enabled for the compilation itself (e.g. -C target-cpu=native)
struct TargetFeatureDetector;
impl CpuFeatureDetector for TargetFeatureDetector {
    fn detect_features(&self, features: &mut [CpuFeature]) {
        let enabled = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();
        let enabled: Vec<&str> = enabled.split(',').collect();

        for feature in features.iter_mut() {
            feature.enabled |= enabled.contains(&feature.target_feature);
        }
    }

    fn is_applicable(&self) -> bool {
        true
    }
}

// Factory that creates the appropriate detector for the current OS
struct PlatformDetector;
impl PlatformDetector {
    fn cpu_features_detectors() -> Vec<Box<dyn CpuFeatureDetector>> {
        vec![Box::new(LinuxDetector), Box::new(MacOSDetector)]
    }

    fn detect_cpu_features(features: &mut [CpuFeature], is_native_build: bool) {
        TargetFeatureDetector.detect_features(features);

        // Host probing only describes the target when we are not cross-compiling
        if !is_native_build {
            return;
        }

        for detector in Self::cpu_features_detectors() {
            if detector.is_applicable() {
                detector.detect_features(features);
                break;
            }
        }
    }

    // Resolves the SIMD4D_BACKEND override, if it names a backend usable on this target
    fn requested_backend(features: &[CpuFeature], target_arch: &str) -> Option<&'static str> {
        let requested = env::var(BACKEND_OVERRIDE_VAR).ok()?;
        let requested = requested.trim().to_lowercase();

        let cfg_flag = match requested.as_str() {
            "" => return None,
            "scalar" | "fallback" => return Some("fallback"),
            "sse4" | "sse4.1" | "sse4_1" => "sse4",
            other => other,
        };

        match features.iter().find(|feature| feature.cfg_flag == cfg_flag) {
            Some(feature) if !feature.supports_arch(target_arch) => {
                println!(
                    "cargo:warning={BACKEND_OVERRIDE_VAR}={requested} is not available for target arch {target_arch}, detecting backend instead"
                );
                None
            }
            Some(feature) if !feature.enabled => {
                println!(
                    "cargo:warning={BACKEND_OVERRIDE_VAR}={requested} needs -C target-feature=+{}, detecting backend instead",
                    feature.target_feature
                );
                None
            }
            Some(feature) => Some(feature.cfg_flag),
            None => {
                println!(
                    "cargo:warning={BACKEND_OVERRIDE_VAR}={requested} is not a known backend (expected one of avx, sse4, sse2, neon, scalar)"
                );
                None
            }
        }
    }

    // Points at target-cpu=native when the host could run a wider backend than the compile enables
    fn hint_wider_backend(features: &[CpuFeature], target_arch: &str, cfg_flag: &str) {
        let selected = features.iter().position(|feature| feature.cfg_flag == cfg_flag);

        let wider = features
            .iter()
            .enumerate()
            .filter(|(index, _)| selected.map_or(true, |selected| *index < selected))
            .map(|(_, feature)| feature)
            .find(|feature| feature.supports_arch(target_arch) && feature.detected && !feature.enabled);

        if let Some(feature) = wider {
            println!(
                "cargo:warning=host supports `{}` but it is not enabled for this build, set RUSTFLAGS=\"-C target-cpu=native\" to use it",
                feature.cfg_flag
            );
        }
    }

    fn apply(features: &mut [CpuFeature], target_arch: &str) {
        // Sort features by priority (highest first)
        features.sort();

        // Use the highest feature the compiler will generate code for,
        // so the intrinsics always inline. Host support alone is only a hint.
        let cfg_flag = match Self::requested_backend(features, target_arch) {
            Some(cfg_flag) => {
                println!("cargo:warning=simd4d backend forced to `{cfg_flag}`");
                cfg_flag
            }
            None => {
                let cfg_flag = features
                    .iter()
                    .filter(|cpu_feature| cpu_feature.supports_arch(target_arch))
                    .find(|cpu_feature| cpu_feature.enabled)
                    .map(|cpu_feature| cpu_feature.cfg_flag)
                    .unwrap_or("fallback");
                Self::hint_wider_backend(features, target_arch, cfg_flag);
                cfg_flag
            }
        };

        println!("applying: {cfg_flag}");

        println!("cargo:rustc-cfg={cfg_flag}");

        for flag in BACKEND_CFG_FLAGS {
            println!("cargo::rustc-check-cfg=cfg({flag})");
        }
    }
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={BACKEND_OVERRIDE_VAR}");

    let mut features = CpuFeature::features();

    // Determine if we're cross-compiling
    let host = env::var("HOST").unwrap_or_default();
    let target = env::var("TARGET").unwrap_or_default();
    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();

    let is_native_build = host == target;

    PlatformDetector::detect_cpu_features(&mut features, is_native_build);

    // SSE2 and NEON are part of the x86_64 and aarch64 baselines
    for feature in features.iter_mut() {
        feature.enabled |= matches!(
            (feature.name, target_arch.as_str()),
            ("sse2", "x86_64") | ("neon", "aarch64")
        );
    }

    PlatformDetector::apply(&mut features, &target_arch);
}
