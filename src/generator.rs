//! Stub generation over files and directories.
//!
//! Sources are scanned in parallel on a rayon pool, each with its own
//! [`StubEmitter`](crate::stub::StubEmitter). Stubs are then written one at
//! a time in discovery order, so when two sources declare the same type the
//! later one wins.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, error, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::{AsigenError, Result};
use crate::stub::{self, Stub};

/// Extension of ActionScript source files.
pub const SOURCE_EXTENSION: &str = "as";

/// Receives user-facing messages while stubs are generated.
pub trait Reporter {
    fn progress(&mut self, _message: &str) {}
    fn warning(&mut self, _message: &str) {}
    fn error(&mut self, _error: &AsigenError) {}
}

/// Totals of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Stub files written, in write order
    pub written: Vec<PathBuf>,
    /// Sources without a class or interface
    pub skipped: usize,
    /// Sources that could not be read or whose stub could not be written
    pub failed: usize,
}

impl Report {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Generates intrinsic stubs according to a [`Config`].
pub struct Generator<'a> {
    config: &'a Config,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Resolves `paths` to the source files to process, in order.
    ///
    /// Directories contribute their `*.as` files, files before
    /// subdirectories and each group sorted by name; subdirectories are only
    /// entered when searching recursively. Plain paths are kept only if they
    /// end in `.as`. Anything else is ignored.
    pub fn collect_sources(&self, paths: &[PathBuf], reporter: &mut dyn Reporter) -> Vec<PathBuf> {
        let mut sources = Vec::new();

        for path in paths {
            if path.is_dir() {
                self.collect_directory(path, &mut sources, reporter);
            } else if path.is_file() && is_source_file(path) {
                sources.push(path.clone());
            } else {
                debug!(path = %path.display(), "ignoring path");
            }
        }

        sources
    }

    fn collect_directory(&self, dir: &Path, sources: &mut Vec<PathBuf>, reporter: &mut dyn Reporter) {
        let max_depth = if self.config.recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by(files_first);

        for entry in walker {
            match entry {
                Ok(entry) if entry.file_type().is_file() && is_source_file(entry.path()) => {
                    sources.push(entry.into_path());
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(dir = %dir.display(), "{e}");
                    reporter.warning(&format!("Couldn't search '{}': {e}", dir.display()));
                }
            }
        }
    }

    /// Generates a stub for every source found under `paths`.
    ///
    /// Per-file problems are reported and counted; only setup failures
    /// abort the run.
    pub fn generate(&self, paths: &[PathBuf], reporter: &mut dyn Reporter) -> Result<Report> {
        if paths.is_empty() {
            return Err(AsigenError::NoPaths);
        }

        let sources = self.collect_sources(paths, reporter);
        self.generate_sources(&sources, reporter)
    }

    /// Generates a stub for each of the already resolved `sources`.
    pub fn generate_sources(
        &self,
        sources: &[PathBuf],
        reporter: &mut dyn Reporter,
    ) -> Result<Report> {
        info!(files = sources.len(), jobs = self.config.jobs, "generating stubs");

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.jobs)
            .build()
            .map_err(|e| AsigenError::ThreadPool(e.to_string()))?;

        for source in sources {
            let message = format!("Parsing '{}'", source.display());
            info!("{message}");
            reporter.progress(&message);
        }

        let public_only = self.config.public_only;
        let rendered: Vec<Result<Stub>> = pool.install(|| {
            sources
                .par_iter()
                .map(|path| render_file(path, public_only))
                .collect()
        });

        let mut report = Report::default();
        for (source, result) in sources.iter().zip(rendered) {
            let outcome = result.and_then(|stub| match stub.type_name {
                Some(type_name) => self.write_stub(&type_name, &stub.text).map(Some),
                None => Ok(None),
            });

            match outcome {
                Ok(Some(output)) => {
                    debug!(source = %source.display(), output = %output.display(), "wrote stub");
                    report.written.push(output);
                }
                Ok(None) => {
                    let message = format!(
                        "No class or interface definition found in '{}'",
                        source.display()
                    );
                    warn!("{message}");
                    reporter.warning(&message);
                    report.skipped += 1;
                }
                Err(e) => {
                    error!("{e}");
                    reporter.error(&e);
                    report.failed += 1;
                }
            }
        }

        Ok(report)
    }

    /// Path of the stub for the qualified `type_name`.
    pub fn output_path(&self, type_name: &str) -> PathBuf {
        let mut path = self.config.output.clone();
        path.extend(type_name.split('.'));
        path.set_extension(SOURCE_EXTENSION);
        path
    }

    fn write_stub(&self, type_name: &str, text: &str) -> Result<PathBuf> {
        let path = self.output_path(type_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| AsigenError::io(parent, e))?;
        }
        fs::write(&path, text).map_err(|e| AsigenError::io(&path, e))?;
        Ok(path)
    }
}

/// True if `path` ends in `.as`, ignoring case.
pub fn is_source_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SOURCE_EXTENSION))
}

fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

fn render_file(path: &Path, public_only: bool) -> Result<Stub> {
    let bytes = fs::read(path).map_err(|e| AsigenError::io(path, e))?;
    let source = String::from_utf8_lossy(&bytes);
    debug!(path = %path.display(), bytes = bytes.len(), "scanning");
    Ok(stub::render(&source, public_only))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    struct Quiet;

    impl Reporter for Quiet {}

    #[derive(Default)]
    struct Recorder {
        progress: Vec<String>,
        warnings: Vec<String>,
        errors: Vec<String>,
        log: Vec<String>,
    }

    impl Reporter for Recorder {
        fn progress(&mut self, message: &str) {
            self.progress.push(message.to_string());
            self.log.push(format!("progress: {message}"));
        }

        fn warning(&mut self, message: &str) {
            self.warnings.push(message.to_string());
            self.log.push(format!("warning: {message}"));
        }

        fn error(&mut self, error: &AsigenError) {
            self.errors.push(error.to_string());
            self.log.push(format!("error: {error}"));
        }
    }

    fn write(dir: &Path, relative: &str, content: &str) -> PathBuf {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    fn config(output: &Path) -> Config {
        Config {
            output: output.to_path_buf(),
            jobs: 2,
            ..Config::default()
        }
    }

    fn source_tree() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "src/A.as", "class A {}");
        write(dir.path(), "src/b.AS", "class b {}");
        write(dir.path(), "src/notes.txt", "class Hidden {}");
        write(dir.path(), "src/sub/C.as", "class sub.C {}");
        dir
    }

    #[test]
    fn test_is_source_file() {
        assert!(is_source_file(Path::new("Foo.as")));
        assert!(is_source_file(Path::new("dir/Foo.AS")));
        assert!(!is_source_file(Path::new("Foo.asc")));
        assert!(!is_source_file(Path::new("as")));
    }

    #[test]
    fn test_collect_sources_flat() {
        let dir = source_tree();
        let cfg = config(&dir.path().join("out"));
        let sources = Generator::new(&cfg).collect_sources(&[dir.path().join("src")], &mut Quiet);

        let names: Vec<_> = sources
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["A.as", "b.AS"]);
    }

    #[test]
    fn test_collect_sources_recursive() {
        let dir = source_tree();
        let cfg = Config {
            recursive: true,
            ..config(&dir.path().join("out"))
        };
        let sources = Generator::new(&cfg).collect_sources(&[dir.path().join("src")], &mut Quiet);

        assert_eq!(sources.len(), 3);
        assert!(sources[2].ends_with("sub/C.as"));
    }

    #[test]
    fn test_collect_sources_plain_paths() {
        let dir = source_tree();
        let cfg = config(&dir.path().join("out"));
        let paths = vec![
            dir.path().join("src/notes.txt"),
            dir.path().join("src/sub/C.as"),
            dir.path().join("missing.as"),
        ];
        let sources = Generator::new(&cfg).collect_sources(&paths, &mut Quiet);
        assert_eq!(sources, vec![dir.path().join("src/sub/C.as")]);
    }

    #[test]
    fn test_output_path() {
        let cfg = config(Path::new("asi"));
        let generator = Generator::new(&cfg);
        assert_eq!(
            generator.output_path("com.foo.Bar"),
            Path::new("asi").join("com").join("foo").join("Bar.as")
        );
        assert_eq!(generator.output_path("Top"), Path::new("asi").join("Top.as"));
    }

    #[test]
    fn test_generate_writes_stubs() {
        let dir = tempfile::tempdir().unwrap();
        let source = write(
            dir.path(),
            "src/Bar.as",
            "import com.util.*;\nclass com.foo.Bar extends com.foo.Base {\n    public function baz():Void {\n        trace(\"}\");\n    }\n}\n",
        );
        let out = dir.path().join("out");
        let cfg = config(&out);

        let mut recorder = Recorder::default();
        let report = Generator::new(&cfg).generate(&[source.clone()], &mut recorder).unwrap();

        let expected = out.join("com/foo/Bar.as");
        assert_eq!(report.written, vec![expected.clone()]);
        assert_eq!(report.skipped, 0);
        assert!(!report.has_failures());
        assert_eq!(
            fs::read_to_string(expected).unwrap(),
            "import com.util.*;\nintrinsic class com.foo.Bar extends com.foo.Base {\n\tpublic function baz():Void;\n}\n"
        );
        assert_eq!(recorder.progress, vec![format!("Parsing '{}'", source.display())]);
    }

    #[test]
    fn test_generate_public_only() {
        let dir = tempfile::tempdir().unwrap();
        let source = write(
            dir.path(),
            "Thing.as",
            "class Thing {\n    private var secret:String;\n    var open:Number;\n}\n",
        );
        let out = dir.path().join("out");
        let cfg = Config {
            public_only: true,
            ..config(&out)
        };

        Generator::new(&cfg).generate(&[source], &mut Quiet).unwrap();
        assert_eq!(
            fs::read_to_string(out.join("Thing.as")).unwrap(),
            "intrinsic class Thing {\n\tpublic var open:Number;\n}\n"
        );
    }

    #[test]
    fn test_generate_skips_sources_without_types() {
        let dir = tempfile::tempdir().unwrap();
        let source = write(dir.path(), "script.as", "stop();\n");
        let out = dir.path().join("out");
        let cfg = config(&out);

        let mut recorder = Recorder::default();
        let report = Generator::new(&cfg).generate(&[source.clone()], &mut recorder).unwrap();

        assert!(report.written.is_empty());
        assert_eq!(report.skipped, 1);
        assert_eq!(
            recorder.warnings,
            vec![format!(
                "No class or interface definition found in '{}'",
                source.display()
            )]
        );
        assert!(!out.exists());
    }

    #[test]
    fn test_generate_later_source_wins() {
        let dir = tempfile::tempdir().unwrap();
        let first = write(dir.path(), "one/Same.as", "class Same { var first; }");
        let second = write(dir.path(), "two/Same.as", "class Same { var second; }");
        let out = dir.path().join("out");
        let cfg = config(&out);

        let report = Generator::new(&cfg).generate(&[first, second], &mut Quiet).unwrap();

        assert_eq!(report.written.len(), 2);
        let text = fs::read_to_string(out.join("Same.as")).unwrap();
        assert!(text.contains("var second;"));
    }

    #[test]
    fn test_generate_reports_write_failures() {
        let dir = tempfile::tempdir().unwrap();
        let source = write(dir.path(), "A.as", "class com.A {}");
        // A file where the output directory should be
        let out = write(dir.path(), "out", "");
        let cfg = config(&out);

        let mut recorder = Recorder::default();
        let report = Generator::new(&cfg).generate(&[source], &mut recorder).unwrap();

        assert_eq!(report.failed, 1);
        assert!(report.has_failures());
        assert_eq!(recorder.errors.len(), 1);
    }

    #[test]
    fn test_generate_continues_past_unreadable_source() {
        let dir = tempfile::tempdir().unwrap();
        let unreadable = dir.path().join("Broken.as");
        fs::create_dir(&unreadable).unwrap();
        let valid = write(dir.path(), "Good.as", "class Good { var ok:Boolean; }");
        let out = dir.path().join("out");
        let cfg = config(&out);

        let mut recorder = Recorder::default();
        let report = Generator::new(&cfg)
            .generate_sources(&[unreadable.clone(), valid], &mut recorder)
            .unwrap();

        assert_eq!(report.failed, 1);
        assert_eq!(report.written, vec![out.join("Good.as")]);
        assert_eq!(recorder.errors.len(), 1);
        assert!(recorder.errors[0].starts_with(&unreadable.display().to_string()));
        assert_eq!(
            fs::read_to_string(out.join("Good.as")).unwrap(),
            "intrinsic class Good {\n\tpublic var ok:Boolean;\n}\n"
        );
    }

    #[test]
    fn test_progress_is_reported_before_outcomes() {
        let dir = tempfile::tempdir().unwrap();
        let first = write(dir.path(), "a.as", "stop();");
        let second = write(dir.path(), "b.as", "play();");
        let cfg = config(&dir.path().join("out"));

        let mut recorder = Recorder::default();
        Generator::new(&cfg)
            .generate_sources(&[first.clone(), second.clone()], &mut recorder)
            .unwrap();

        let kinds: Vec<&str> = recorder
            .log
            .iter()
            .map(|line| line.split(':').next().unwrap())
            .collect();
        assert_eq!(kinds, vec!["progress", "progress", "warning", "warning"]);
        assert_eq!(recorder.progress[1], format!("Parsing '{}'", second.display()));
    }

    #[test]
    fn test_generate_requires_paths() {
        let cfg = Config::default();
        let err = Generator::new(&cfg).generate(&[], &mut Quiet).unwrap_err();
        assert!(matches!(err, AsigenError::NoPaths));
    }
}
