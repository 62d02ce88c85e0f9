use std::cmp::Ordering;
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

// Environment variable that pins the register width (in bytes) and forces the
// portable back-end. Used to exercise lane counts the host does not have.
const REGISTER_BYTES_OVERRIDE: &str = "SIMDARRAY_REGISTER_BYTES";

// CPU features we want to detect
#[derive(PartialEq, Eq, Debug)]
struct CpuFeature {
    name: &'static str,
    // Spelling of the flag in /proc/cpuinfo when it differs from `name`
    cpuinfo_flag: &'static str,
    cfg_flag: &'static str,
    register_bytes: usize,
    detected: bool,
}

impl CpuFeature {
    // Define priority order between CPU Features (Lowest number == Highest Priority)
    fn priority(&self) -> usize {
        match self.name {
            "avx512f" => 0,
            "avx2" => 1,
            "neon" => 2,
            "sse4_1" => 3,
            _ => usize::MAX, // lowest priority by default
        }
    }

    // Groups all CPU features that change the register width used by this crate
    fn features(target_arch: &str) -> Vec<CpuFeature> {
        match target_arch {
            "x86" | "x86_64" => vec![
                CpuFeature {
                    name: "sse4_1",
                    cpuinfo_flag: "sse4_1",
                    cfg_flag: "sse",
                    register_bytes: 16,
                    detected: false,
                },
                CpuFeature {
                    name: "avx2",
                    cpuinfo_flag: "avx2",
                    cfg_flag: "avx2",
                    register_bytes: 32,
                    detected: false,
                },
                CpuFeature {
                    name: "avx512f",
                    cpuinfo_flag: "avx512f",
                    cfg_flag: "avx512",
                    register_bytes: 64,
                    detected: false,
                },
            ],
            // Linux reports NEON as "asimd" on AArch64
            "aarch64" => vec![CpuFeature {
                name: "neon",
                cpuinfo_flag: "asimd",
                cfg_flag: "neon",
                register_bytes: 16,
                detected: false,
            }],
            _ => Vec::new(),
        }
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
        if let Ok(cpuinfo) = fs::read_to_string("/proc/cpuinfo") {
            let contents = cpuinfo.to_lowercase();
            for feature in features.iter_mut() {
                feature.detected = contents
                    .split_whitespace()
                    .any(|flag| flag == feature.cpuinfo_flag || flag == feature.name);
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
                    "avx512f" => feature.detected = contents.contains("hw.optional.avx512f: 1"),
                    "avx2" => feature.detected = contents.contains("hw.optional.avx2_0: 1"),
                    "sse4_1" => feature.detected = contents.contains("hw.optional.sse4_1: 1"),
                    "neon" => feature.detected = contents.contains("hw.optional.neon: 1"),
                    _ => {}
                }
            }
        }
    }

    fn is_applicable(&self) -> bool {
        cfg!(target_os = "macos")
    }
}

// No windows detector for now
// TODO: Develop a Windows detector (Access to a windows machine needed)

// Factory that creates the appropriate detector for the current OS
struct PlatformDetector;
impl PlatformDetector {
    fn cpu_features_detectors() -> Vec<Box<dyn CpuFeatureDetector>> {
        vec![Box::new(LinuxDetector), Box::new(MacOSDetector)]
    }

    fn detect_cpu_features(features: &mut [CpuFeature]) {
        // Get detectors for all supported platforms
        let detectors = Self::cpu_features_detectors();

        // Find the applicable detector and use it
        for detector in detectors {
            if detector.is_applicable() {
                detector.detect_features(features);
                break;
            }
        }
    }

    fn register_bytes_override() -> Option<usize> {
        let value = env::var(REGISTER_BYTES_OVERRIDE).ok()?;
        match value.trim().parse::<usize>() {
            Ok(bytes) if bytes.is_power_of_two() && bytes <= 64 => Some(bytes),
            _ => panic!(
                "Invalid {REGISTER_BYTES_OVERRIDE}={value:?}. Expected a power of two between 1 and 64"
            ),
        }
    }

    // Emits the cfg flag of the highest detected feature and returns the
    // register width that goes with it. Falls back to 16-byte portable lanes.
    fn apply(features: &mut [CpuFeature], register_override: Option<usize>) -> usize {
        // Sort features by priority (highest first)
        features.sort();

        let (cfg_flag, register_bytes) = match register_override {
            Some(bytes) => ("fallback", bytes),
            None => features
                .iter()
                .find(|cpu_feature| cpu_feature.detected)
                .map(|cpu_feature| (cpu_feature.cfg_flag, cpu_feature.register_bytes))
                .unwrap_or(("fallback", 16)),
        };

        println!("cargo:rustc-cfg={cfg_flag}");

        println!("cargo::rustc-check-cfg=cfg(avx512)");
        println!("cargo::rustc-check-cfg=cfg(avx2)");
        println!("cargo::rustc-check-cfg=cfg(sse)");
        println!("cargo::rustc-check-cfg=cfg(neon)");
        println!("cargo::rustc-check-cfg=cfg(fallback)");

        register_bytes
    }
}

fn write_register_width(register_bytes: usize) {
    let out_dir = env::var("OUT_DIR").expect("cargo always sets OUT_DIR for build scripts");
    let out_path = Path::new(&out_dir).join("register_width.rs");

    fs::write(
        &out_path,
        format!(
            "
/// Width in bytes of the widest vector register enabled for this build.
///
/// Detected by the build script from the host CPU, or pinned through
/// `{REGISTER_BYTES_OVERRIDE}`.
pub const REGISTER_BYTES: usize = {register_bytes};
"
        ),
    )
    .expect("Failed to write register_width.rs");
}

fn main() {
    let target_arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();

    // Define the CPU features we're interested in (architecture dependant)
    let mut features = CpuFeature::features(&target_arch);

    // Determine if we're cross-compiling
    let host = env::var("HOST").unwrap_or_default();
    let target = env::var("TARGET").unwrap_or_default();

    let is_native_build = host == target;

    // Only run CPU detection for native builds
    if is_native_build {
        PlatformDetector::detect_cpu_features(&mut features);
    }

    let register_override = PlatformDetector::register_bytes_override();
    let register_bytes = PlatformDetector::apply(&mut features, register_override);

    write_register_width(register_bytes);

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed={REGISTER_BYTES_OVERRIDE}");
}
