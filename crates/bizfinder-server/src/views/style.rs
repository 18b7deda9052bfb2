/// Page stylesheet, inlined into `<head>`. Dark theme.
pub(crate) const STYLESHEET: &str = r"
* { box-sizing: border-box; }
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background-color: #0E1117;
    color: #FFFFFF;
}
h1, h2, h3, h4, h5, h6 { color: #FFFFFF; }
p { color: #E2E8F0; }
.layout { display: flex; min-height: 100vh; }
.sidebar {
    width: 280px;
    flex-shrink: 0;
    padding: 1.5rem 1rem;
    background-color: #161B22;
}
main { flex: 1; padding: 1.5rem 2rem; min-width: 0; }
.panel {
    background-color: #1E2530;
    padding: 1rem;
    border-radius: 10px;
    margin-bottom: 1rem;
}
.panel h2, .panel h4, .business-card h3, .metric-value { color: #FF4B4B; }
.panel-inner {
    background-color: #2D3748;
    padding: 1.25rem;
    border-radius: 8px;
}
.panel-inner ol { color: #E2E8F0; padding-left: 1.5rem; }
.powered { text-align: center; }
.powered p { color: #A0AEC0; margin: 0 0 0.5rem 0; }
.powered h4 { margin: 0; }
.status { padding: 0.75rem; border-radius: 8px; font-size: 0.875rem; }
.status.ok { background-color: #1C3D2A; color: #9AE6B4; }
.status.missing { background-color: #4A1D1D; color: #FEB2B2; }
.search-form { display: flex; gap: 1rem; align-items: flex-end; margin-bottom: 1.5rem; }
.search-form label { display: flex; flex-direction: column; gap: 0.35rem; color: #A0AEC0; }
.search-form .query { flex: 3; }
.search-form .where { flex: 2; }
.search-form input {
    padding: 0.6rem 0.75rem;
    border-radius: 6px;
    border: 1px solid #2D3748;
    background-color: #1E2530;
    color: #FFFFFF;
}
.search-form button {
    flex: 1;
    height: 3em;
    border: none;
    border-radius: 20px;
    background-color: #FF4B4B;
    color: white;
    font-weight: bold;
    cursor: pointer;
}
.banner { padding: 0.75rem 1rem; border-radius: 8px; margin: 1rem 0; }
.banner.warning { background-color: #3D3417; color: #FBD38D; }
.banner.error { background-color: #4A1D1D; color: #FEB2B2; }
.results { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
.metrics { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; margin-bottom: 1rem; }
.metric-card {
    background-color: #1E2530;
    padding: 1rem;
    border-radius: 8px;
    text-align: center;
    border: 1px solid #2D3748;
}
.metric-value { font-size: 1.5rem; font-weight: bold; }
.metric-label { font-size: 0.875rem; color: #A0AEC0; }
.business-card {
    padding: 1.5rem;
    border-radius: 10px;
    border: 1px solid #2D3748;
    margin: 10px 0;
    background-color: #1E2530;
    box-shadow: 0 2px 4px rgba(0, 0, 0, 0.2);
}
.business-card h3 { margin: 0 0 1rem 0; }
.business-card p { margin: 0.5rem 0; }
.business-card strong { color: #A0AEC0; }
.business-card small { color: #718096; }
.rating-badge { color: white; padding: 4px 8px; border-radius: 15px; font-size: 0.875rem; }
.rating-badge.high { background-color: #28A745; }
.rating-badge.low { background-color: #FFC107; }
.rating-badge.unrated { background-color: #6C757D; }
.table-container { background-color: #1E2530; border-radius: 10px; padding: 1rem; overflow-x: auto; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: 0.5rem; border-bottom: 1px solid #2D3748; }
th { color: #A0AEC0; }
#map { height: 600px; border-radius: 10px; }
.popup { font-family: Arial, sans-serif; min-width: 200px; }
.popup h4 { color: #FF4B4B; margin: 0 0 10px 0; }
.popup p { color: #1A202C; margin: 5px 0; }
footer { text-align: center; color: #6C757D; padding: 1rem; border-top: 1px solid #2D3748; margin-top: 2rem; }
@media (max-width: 900px) {
    .layout { flex-direction: column; }
    .sidebar { width: 100%; }
    .results { grid-template-columns: 1fr; }
    .search-form { flex-direction: column; align-items: stretch; }
}
";
