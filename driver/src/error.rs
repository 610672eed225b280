use kernel::KernelError;

/// Converts a foreign error into a [`KernelError`] report.
pub(crate) trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}
