use axum::response::Html;

/// Serves the static dashboard page. All data comes from the JSON endpoints,
/// so the page itself never changes between requests.
pub async fn dashboard_page() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

const DASHBOARD_PAGE: &str = r##"<!doctype html>
<html lang="id">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Prediksi USD/IDR</title>
<script src="https://cdn.plot.ly/plotly-2.32.0.min.js"></script>
<style>
  body { font-family: sans-serif; margin: 0 auto; max-width: 1100px; padding: 1rem 2rem; }
  .caption { color: #555; }
  .banner { background: #fff3cd; border: 1px solid #ffe69c; border-radius: 4px; padding: 0.6rem 1rem; margin: 0.4rem 0; }
  .banner.info { background: #cfe2ff; border-color: #9ec5fe; }
  .metric { border: 1px solid #ddd; border-radius: 6px; display: inline-block; padding: 0.8rem 1.4rem; margin: 0.8rem 0; }
  .metric .value { font-size: 1.6rem; font-weight: bold; }
  .metric .delta { color: #555; }
  .range-controls { margin: 1rem 0 0.5rem; }
  .range-controls label { margin-right: 0.5rem; }
</style>
</head>
<body>
<h1>📈 Dashboard Prediksi Nilai Tukar USD/IDR</h1>
<p class="caption">Prediksi nilai tukar untuk 7 hari ke depan berdasarkan data 30 hari terakhir</p>
<div id="banners"></div>
<div id="chart-main" style="height: 420px;"></div>
<div id="metric"></div>
<p class="caption" id="trend-caption"></p>
<div id="trend" class="banner info" hidden></div>
<div class="range-controls">
  <label>Pilih rentang tanggal</label>
  <input type="date" id="range-start">
  <input type="date" id="range-end">
</div>
<div id="chart-range" style="height: 380px;"></div>
<script>
const rupiah = (v) => 'Rp ' + v.toLocaleString('id-ID', { minimumFractionDigits: 2, maximumFractionDigits: 2 });
const trendText = {
  naik: '📈 Tren USD/IDR diperkirakan akan naik',
  turun: '📉 Tren USD/IDR diperkirakan akan turun',
  stabil: '📊 Nilai tukar diperkirakan stabil',
};

function showBanners(warnings) {
  const host = document.getElementById('banners');
  host.innerHTML = '';
  for (const w of warnings) {
    const div = document.createElement('div');
    div.className = 'banner';
    div.textContent = '📌 ' + w;
    host.appendChild(div);
  }
}

function showMetric(prediction) {
  const host = document.getElementById('metric');
  if (!prediction) { host.innerHTML = ''; return; }
  const sign = prediction.error >= 0 ? '+' : '';
  host.innerHTML = '<div class="metric">'
    + '<div>Prediksi untuk ' + prediction.target_date + '</div>'
    + '<div class="value">' + rupiah(prediction.predicted) + '</div>'
    + '<div class="delta">selisih ' + sign + prediction.error.toFixed(2) + ' dari data aktual</div>'
    + '</div>';
}

function showTrend(trend) {
  const caption = document.getElementById('trend-caption');
  const label = document.getElementById('trend');
  if (!trend) { caption.textContent = ''; label.hidden = true; return; }
  caption.textContent = '📊 Rata-rata 7 hari terakhir: ' + rupiah(trend.last_7_actual_mean)
    + ' | Rata-rata forecast: ' + rupiah(trend.next_7_forecast_mean);
  label.textContent = trendText[trend.label] || trend.label;
  label.hidden = false;
}

async function loadRange() {
  const start = document.getElementById('range-start').value;
  const end = document.getElementById('range-end').value;
  const params = new URLSearchParams();
  if (start) params.set('start_date', start);
  if (end) params.set('end_date', end);
  const res = await fetch('/api/v1/range?' + params.toString());
  const body = await res.json();
  const fig = body.data.figure;
  Plotly.react('chart-range', fig.data, fig.layout, { responsive: true });
}

async function loadDashboard() {
  const res = await fetch('/api/v1/dashboard');
  if (!res.ok) {
    showBanners(['Gagal memuat data dashboard (HTTP ' + res.status + ').']);
    return;
  }
  const body = await res.json();
  const view = body.data;
  Plotly.newPlot('chart-main', view.figure.data, view.figure.layout, { responsive: true });
  showBanners(view.warnings);
  showMetric(view.prediction);
  showTrend(view.trend);
  if (view.range) {
    const start = document.getElementById('range-start');
    const end = document.getElementById('range-end');
    start.min = end.min = view.range.min_date;
    start.max = end.max = view.range.max_date;
    start.value = view.range.min_date;
    end.value = view.range.max_date;
  }
  await loadRange();
}

document.getElementById('range-start').addEventListener('change', loadRange);
document.getElementById('range-end').addEventListener('change', loadRange);
loadDashboard();
</script>
</body>
</html>
"##;
