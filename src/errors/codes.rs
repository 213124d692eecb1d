pub struct ErrorCode;

impl ErrorCode {
    // Container runtime errors: R1xx
    pub const RUNTIME_COMMAND_FAILED: &'static str = "R100";
    pub const RUNTIME_CONTAINER_NOT_FOUND: &'static str = "R101";
    pub const RUNTIME_OUTPUT_PARSE_FAILED: &'static str = "R102";
    pub const RUNTIME_COMMAND_TIMEOUT: &'static str = "R103";

    // Store errors: S1xx
    pub const STORE_CONNECTION_FAILED: &'static str = "S100";
    pub const STORE_QUERY_FAILED: &'static str = "S101";
    pub const STORE_TIMEOUT: &'static str = "S102";

    // Service status errors: V1xx
    pub const SERVICE_INVALID_BODY: &'static str = "V100";
    pub const SERVICE_MISSING_STATUS: &'static str = "V101";
    pub const SERVICE_INVALID_STATUS: &'static str = "V102";
    pub const SERVICE_NOT_FOUND: &'static str = "V104";

    // Host probe errors: H1xx
    pub const PROBE_DISK_NOT_FOUND: &'static str = "H100";
    pub const PROBE_MEMORY_UNAVAILABLE: &'static str = "H101";
    pub const PROBE_SAMPLE_FAILED: &'static str = "H102";

    // Config errors: C1xx
    pub const CONFIG_READ_FAILED: &'static str = "C100";
    pub const CONFIG_PARSE_FAILED: &'static str = "C101";
    pub const CONFIG_INVALID_VALUE: &'static str = "C102";

    // Request shape errors: Q1xx
    pub const REQUEST_INVALID_PATH: &'static str = "Q100";

    pub const ROUTE_NOT_FOUND: &'static str = "E404";
    pub const METHOD_NOT_ALLOWED: &'static str = "E405";
    pub const INTERNAL: &'static str = "E000";
}
