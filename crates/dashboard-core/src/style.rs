// File: crates/dashboard-core/src/style.rs
// Summary: Inline stylesheet shared by the static page and the desktop shell.

pub const DASHBOARD_CSS: &str = r#"
*{box-sizing:border-box}
body{margin:0;font-family:"Segoe UI",Arial,Helvetica,Roboto,"DejaVu Sans",sans-serif;color:#111827}
.page{min-height:100vh;background:#f9fafb;padding:2rem 0}
.container{max-width:80rem;margin:0 auto;padding:0 2rem}
.header{text-align:center;margin-bottom:2rem}
.toolbar{display:flex;justify-content:space-between;align-items:center;margin-bottom:1rem}
.lang-switch{display:flex;align-items:center;gap:.5rem}
.lang-switch .label{font-size:.875rem;font-weight:500;color:#374151}
.lang-btn{padding:.25rem .75rem;border:0;border-radius:.25rem;font-size:.875rem;font-weight:500;cursor:pointer;background:#e5e7eb;color:#374151}
.lang-btn:hover{background:#d1d5db}
.lang-btn.active{background:#2563eb;color:#fff}
h1{font-size:2.25rem;font-weight:700;color:#111827;margin:0 0 .5rem}
.subtitle{font-size:1.25rem;color:#4b5563;margin:0 0 1rem}
.notice{background:#fefce8;border:1px solid #fef08a;border-radius:.5rem;padding:.75rem;max-width:42rem;margin:0 auto}
.notice p{margin:0;font-size:.875rem;color:#854d0e}
.notice strong{font-weight:600}
.charts{display:grid;grid-template-columns:1fr;gap:2rem}
@media (min-width:1024px){.charts{grid-template-columns:1fr 1fr}}
.card{background:#fff;padding:1.5rem;border-radius:.5rem;box-shadow:0 10px 15px -3px rgba(0,0,0,.1),0 4px 6px -4px rgba(0,0,0,.1)}
.card h3{font-size:1.125rem;font-weight:600;text-align:center;margin:0 0 1rem}
.card svg{display:block;margin:0 auto}
.caption{text-align:center;font-size:.875rem;color:#6b7280;margin:.5rem 0 0}
.selector{display:flex;justify-content:center;align-items:center;gap:.5rem;margin-bottom:1rem}
.selector label{font-size:.875rem;font-weight:500;color:#374151}
.selector select{border:1px solid #d1d5db;border-radius:.25rem;padding:.25rem .75rem;font-size:.875rem}
.summary{margin-top:2rem}
.summary-grid{display:grid;grid-template-columns:1fr 1fr;gap:1rem;max-width:28rem;margin:0 auto}
.stat{text-align:center}
.stat .value{font-size:1.5rem;font-weight:700}
.stat .value.city-a{color:#2563eb}
.stat .value.city-b{color:#dc2626}
.stat .name{font-size:.875rem;color:#4b5563}
"#;
