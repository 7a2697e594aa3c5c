//! Mask → format → unmask pipeline for a single file.

use logos_dialect::{mask, unmask};
use logos_runner::{FormatConfig, Formatter};
use tracing::{debug, info, warn};

use crate::error::{CoreError, CoreResult};
use crate::source_file::SourceFile;
use crate::temps::TempStore;

/// Formats source files through an external formatter, hiding Logos syntax
/// from it.
pub struct FormatPipeline<F: Formatter> {
    formatter: F,
    config: FormatConfig,
    temps: Option<TempStore>,
}

impl<F: Formatter> FormatPipeline<F> {
    pub fn new(formatter: F, config: FormatConfig) -> Self {
        Self {
            formatter,
            config,
            temps: None,
        }
    }

    /// Keep masked inputs and raw formatter outputs in `temps`.
    pub fn with_temps(mut self, temps: TempStore) -> Self {
        self.temps = Some(temps);
        self
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    pub fn temps(&self) -> Option<&TempStore> {
        self.temps.as_ref()
    }

    /// Format `file`, storing the result in its transformed buffer.
    ///
    /// `index` only distinguishes saved intermediates of different files.
    pub fn format_file(&self, index: usize, file: &mut SourceFile) -> CoreResult<()> {
        let assumed = file.assumed_path();

        let (masked, markers) = if file.kind().is_logos() {
            info!("Transforming {:?} to a clang-format safe form", file.path());
            let (content, markers) = mask(file.original()).into_parts();
            (content, Some(markers))
        } else {
            debug!("{:?} is not a Logos file, formatting as is", file.path());
            (file.original().to_string(), None)
        };

        if let Some(temps) = &self.temps {
            temps.save(index, &assumed, "unformatted", &masked)?;
        }

        let result = self
            .formatter
            .format(&masked, &assumed, &self.config)
            .map_err(|source| CoreError::Format {
                path: file.path().to_path_buf(),
                source,
            })?;

        if let Some(diagnostics) = result.diagnostics() {
            warn!("clang-format diagnostics for {:?}:\n{}", file.path(), diagnostics);
        }

        if let Some(temps) = &self.temps {
            temps.save(index, &assumed, "formatted", &result.stdout)?;
        }

        let restored = match markers {
            Some(markers) => {
                info!("Restoring {} Logos directive(s) in {:?}", markers.len(), file.path());
                unmask(&result.stdout, &markers).map_err(|source| CoreError::DialectMasking {
                    path: file.path().to_path_buf(),
                    source,
                })?
            }
            None => result.stdout,
        };

        file.set_transformed(restored);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use logos_runner::{MockFormatter, MockResponse};
    use std::path::PathBuf;

    #[test]
    fn test_logos_file_is_masked_for_formatter() {
        let formatter = MockFormatter::new();
        let pipeline = FormatPipeline::new(formatter.clone(), FormatConfig::default());
        let mut file = SourceFile::from_content("Tweak.x", "%hook Foo\n%end\n");

        pipeline.format_file(0, &mut file).unwrap();

        let calls = formatter.get_method_calls("format");
        assert_eq!(
            calls[0].content.as_deref(),
            Some("@logosformathook Foo;\n@logosformatend;\n")
        );
        assert_eq!(calls[0].assume_filename, Some(PathBuf::from("Tweak.m")));
        assert_eq!(file.transformed(), "%hook Foo\n%end\n");
        assert!(!file.is_changed());
    }

    #[test]
    fn test_plain_file_is_not_masked() {
        let formatter = MockFormatter::new();
        let pipeline = FormatPipeline::new(formatter.clone(), FormatConfig::default());
        let mut file = SourceFile::from_content("Tweak.m", "int r = a %orig;\n");

        pipeline.format_file(0, &mut file).unwrap();

        let calls = formatter.get_method_calls("format");
        assert_eq!(calls[0].content.as_deref(), Some("int r = a %orig;\n"));
        assert_eq!(calls[0].assume_filename, Some(PathBuf::from("Tweak.m")));
    }

    #[test]
    fn test_formatted_output_is_unmasked() {
        let formatter = MockFormatter::new().add_response(MockResponse::success(
            "@logosformathook Foo;\n- (void)bar {\n  @logosformatorig;\n}\n@logosformatend;\n",
        ));
        let pipeline = FormatPipeline::new(formatter, FormatConfig::default());
        let mut file =
            SourceFile::from_content("Tweak.xm", "%hook Foo\n-(void)bar{\n%orig;\n}\n%end\n");

        pipeline.format_file(0, &mut file).unwrap();

        assert_eq!(
            file.transformed(),
            "%hook Foo\n- (void)bar {\n  %orig;\n}\n%end\n"
        );
        assert!(file.is_changed());
    }

    #[test]
    fn test_lost_marker_is_dialect_error() {
        let formatter = MockFormatter::new().add_response(MockResponse::success("\n"));
        let pipeline = FormatPipeline::new(formatter, FormatConfig::default());
        let mut file = SourceFile::from_content("Tweak.x", "%hook Foo\n%end\n");

        let err = pipeline.format_file(0, &mut file).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DialectMasking);
        assert!(!file.is_changed());
    }

    #[test]
    fn test_formatter_failure_is_reported() {
        let formatter = MockFormatter::new().add_response(MockResponse::failure(
            1,
            "Tweak.m:1:1: error: unexpected token",
        ));
        let pipeline = FormatPipeline::new(formatter, FormatConfig::default());
        let mut file = SourceFile::from_content("Tweak.x", "%hook Foo\n%end\n");

        let err = pipeline.format_file(0, &mut file).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FormatterError);
        assert!(err.to_string().contains("unexpected token"));
    }
}
