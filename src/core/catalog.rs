//! # Test Catalog Module / 测试目录模块
//!
//! The fixed set of test executables the harness knows how to run and the
//! arguments each one is launched with.
//!
//! 测试工具可运行的固定测试可执行文件集合，以及每个文件的启动参数。

use crate::infra::command::Invocation;
use std::fmt;

/// One of the recognized `--test_name` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestKind {
    TfliteUtils,
    InferenceStress,
    ModelLoadingStress,
    InferenceRepeatability,
    ClassificationModels,
    DetectionModels,
    SegmentationModels,
    MultipleTpusInferenceStress,
    ModelsBenchmark,
}

impl TestKind {
    /// Every test, in the order they are listed in `--help`.
    pub const ALL: [TestKind; 9] = [
        TestKind::TfliteUtils,
        TestKind::InferenceStress,
        TestKind::ModelLoadingStress,
        TestKind::InferenceRepeatability,
        TestKind::ClassificationModels,
        TestKind::DetectionModels,
        TestKind::SegmentationModels,
        TestKind::MultipleTpusInferenceStress,
        TestKind::ModelsBenchmark,
    ];

    /// Exact, case-sensitive lookup by test name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// The test name, which is also the executable's file name.
    pub fn name(self) -> &'static str {
        match self {
            TestKind::TfliteUtils => "tflite_utils_test",
            TestKind::InferenceStress => "inference_stress_test",
            TestKind::ModelLoadingStress => "model_loading_stress_test",
            TestKind::InferenceRepeatability => "inference_repeatability_test",
            TestKind::ClassificationModels => "classification_models_test",
            TestKind::DetectionModels => "detection_models_test",
            TestKind::SegmentationModels => "segmentation_models_test",
            TestKind::MultipleTpusInferenceStress => "multiple_tpus_inference_stress_test",
            TestKind::ModelsBenchmark => "models_benchmark",
        }
    }

    /// Fixed arguments passed to the executable.
    pub fn args(self) -> &'static [&'static str] {
        match self {
            TestKind::TfliteUtils => &[],
            TestKind::InferenceStress => &[
                "--stress_test_runs=10000",
                "--stress_with_sleep_test_runs=200",
            ],
            TestKind::ModelLoadingStress => &["--stress_test_runs=50"],
            TestKind::InferenceRepeatability => &["--stress_test_runs=1000", "--gtest_repeat=20"],
            // TF2 ResNet50 fails on some platforms and is excluded.
            TestKind::ClassificationModels => &[
                "--gtest_repeat=10",
                "--gtest_filter=-*tfhub_tf2_resnet_50_imagenet_ptq*",
            ],
            TestKind::DetectionModels => &["--gtest_repeat=100"],
            TestKind::SegmentationModels => &["--gtest_repeat=100"],
            TestKind::MultipleTpusInferenceStress => &["--num_inferences=5000"],
            // Benchmarks only report numbers. CPU scaling is left as is since
            // disabling it needs root.
            TestKind::ModelsBenchmark => &["--benchmark_color=false"],
        }
    }

    /// Whether the test needs more than one accelerator attached.
    pub fn requires_multiple_tpus(self) -> bool {
        matches!(self, TestKind::MultipleTpusInferenceStress)
    }

    /// The executable name plus its arguments, not yet resolved to a directory.
    pub fn invocation(self) -> Invocation {
        Invocation::new(self.name(), self.args().iter().copied())
    }
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
