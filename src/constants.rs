/// Default OpenAlgo server address
pub const DEFAULT_HOST: &str = "http://127.0.0.1:5000";
/// Default REST API version segment
pub const DEFAULT_API_VERSION: &str = "v1";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
/// Strategy tag sent when the caller does not name one
pub const DEFAULT_STRATEGY: &str = "Python";
/// Maximum number of requests per rate limiter period
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 10;
/// Rate limiter period in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 1;
/// Requests that may be sent back to back before pacing kicks in
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 10;
/// User agent string used in HTTP requests to identify this client to the OpenAlgo server
pub const USER_AGENT: &str = concat!("openalgo-rs/", env!("CARGO_PKG_VERSION"));
/// UTC offset of Asia/Kolkata in seconds; candle timestamps are rendered in this zone
pub const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// National Stock Exchange equity segment
pub const EXCHANGE_NSE: &str = "NSE";
/// Bombay Stock Exchange equity segment
pub const EXCHANGE_BSE: &str = "BSE";
/// NSE futures and options
pub const EXCHANGE_NFO: &str = "NFO";
/// BSE futures and options
pub const EXCHANGE_BFO: &str = "BFO";
/// NSE currency derivatives
pub const EXCHANGE_CDS: &str = "CDS";
/// BSE currency derivatives
pub const EXCHANGE_BCD: &str = "BCD";
/// Multi Commodity Exchange
pub const EXCHANGE_MCX: &str = "MCX";
/// National Commodity and Derivatives Exchange
pub const EXCHANGE_NCDEX: &str = "NCDEX";
/// NSE indices
pub const EXCHANGE_NSE_INDEX: &str = "NSE_INDEX";
/// BSE indices
pub const EXCHANGE_BSE_INDEX: &str = "BSE_INDEX";
