/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
/// HTTP layer: URL building, API key injection, pacing and error mapping
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response envelopes and order acknowledgements
pub mod responses;
