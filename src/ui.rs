#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Workout,
    Nutrition,
    Progress,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::Workout, Page::Nutrition, Page::Progress];

    pub fn path(self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::Workout => "/workout",
            Page::Nutrition => "/nutrition",
            Page::Progress => "/progress",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Workout => "Workout Planner",
            Page::Nutrition => "Nutrition Tracker",
            Page::Progress => "Progress Tracker",
        }
    }

    fn body(self) -> &'static str {
        match self {
            Page::Dashboard => DASHBOARD_BODY,
            Page::Workout => WORKOUT_BODY,
            Page::Nutrition => NUTRITION_BODY,
            Page::Progress => PROGRESS_BODY,
        }
    }

    fn script(self) -> &'static str {
        match self {
            Page::Dashboard => DASHBOARD_SCRIPT,
            Page::Workout => WORKOUT_SCRIPT,
            Page::Nutrition => NUTRITION_SCRIPT,
            Page::Progress => PROGRESS_SCRIPT,
        }
    }
}

pub fn render_page(page: Page) -> String {
    SHELL_HTML
        .replace("{{TITLE}}", page.title())
        .replace("{{NAV}}", &render_nav(page))
        .replace("{{BODY}}", page.body())
        .replace("{{PAGE_SCRIPT}}", page.script())
}

fn render_nav(active: Page) -> String {
    Page::ALL
        .iter()
        .map(|page| {
            let class = if *page == active { "tab active" } else { "tab" };
            format!(
                r#"<a class="{class}" href="{}">{}</a>"#,
                page.path(),
                page.title()
            )
        })
        .collect::<Vec<_>>()
        .join("")
}

const SHELL_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}} · Fitness Tracker</title>
  <style>
    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    nav { display: flex; flex-wrap: wrap; gap: 6px; padding: 6px; background: rgba(47, 72, 88, 0.08); border-radius: 999px; }
    .tab { border-radius: 999px; padding: 8px 14px; font-weight: 600; color: #6b645d; text-decoration: none; }
    .tab.active { background: white; color: var(--accent-2); box-shadow: 0 8px 16px rgba(47, 72, 88, 0.12); }

    h1 { font-family: Georgia, serif; font-size: clamp(2rem, 4vw, 2.6rem); margin: 0; }
    h2 { margin: 0 0 12px; font-size: 1.3rem; }

    .panel { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 16px; }
    .card, .stat { background: white; border-radius: 18px; padding: 18px; border: 1px solid rgba(47, 72, 88, 0.08); }
    .stat { display: grid; gap: 8px; }
    .stat .label { font-size: 0.85rem; text-transform: uppercase; letter-spacing: 0.12em; color: #8b857d; }
    .stat .value { font-size: 1.7rem; font-weight: 600; color: var(--accent-2); }
    .stat .hint { color: #6f6a65; font-size: 0.9rem; }

    .bar { height: 10px; border-radius: 5px; background: rgba(47, 72, 88, 0.12); overflow: hidden; }
    .bar span { display: block; height: 100%; background: var(--accent); }

    .split { display: grid; grid-template-columns: 2fr 1fr; gap: 16px; }
    @media (max-width: 720px) { .split { grid-template-columns: 1fr; } .app { padding: 28px 22px; } }

    ul.records { list-style: none; margin: 0; padding: 0; display: grid; gap: 8px; }
    ul.records li { display: flex; justify-content: space-between; align-items: center; gap: 12px; padding: 10px 0; border-bottom: 1px solid rgba(47, 72, 88, 0.08); }
    ul.records .secondary { display: block; color: #6f6a65; font-size: 0.9rem; }

    form { display: grid; gap: 10px; }
    input, textarea { font: inherit; padding: 10px 12px; border-radius: 12px; border: 1px solid rgba(47, 72, 88, 0.2); }
    button { appearance: none; border: none; border-radius: 999px; padding: 12px 18px; font-weight: 600; cursor: pointer; background: var(--accent); color: white; }
    button.delete { background: var(--accent-2); padding: 6px 12px; font-size: 0.85rem; }

    svg.chart { width: 100%; height: 260px; display: block; }
    .chart-grid { stroke: rgba(47, 72, 88, 0.12); }
    .chart-label { fill: #7a746d; font-size: 11px; }
    .legend { display: flex; gap: 14px; flex-wrap: wrap; font-size: 0.9rem; }
    .legend i { display: inline-block; width: 12px; height: 12px; border-radius: 3px; margin-right: 6px; vertical-align: middle; }

    .status { font-size: 0.95rem; min-height: 1.2em; color: #6b645d; }
    .status[data-type="error"] { color: #c63b2b; }
    .status[data-type="success"] { color: #2d7a4b; }
  </style>
</head>
<body>
  <main class="app">
    <nav>{{NAV}}</nav>
    <h1>{{TITLE}}</h1>
{{BODY}}
    <div class="status" id="status"></div>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    let statusTimer = null;

    const showNotice = (notice) => {
      statusEl.textContent = notice.message;
      statusEl.dataset.type = notice.severity;
      clearTimeout(statusTimer);
      statusTimer = setTimeout(() => {
        statusEl.textContent = '';
        statusEl.dataset.type = '';
      }, 3000);
    };

    const escapeHtml = (text) =>
      String(text).replace(/[&<>"']/g, (c) => ({ '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;', "'": '&#39;' }[c]));

    const fmt = (value, decimals = 0) => {
      if (typeof value !== 'number' || Number.isNaN(value)) {
        return '--';
      }
      const factor = Math.pow(10, decimals);
      return (Math.round(value * factor) / factor).toString();
    };

    const api = async (method, path, body) => {
      const res = await fetch(path, {
        method,
        headers: body ? { 'content-type': 'application/json' } : {},
        body: body ? JSON.stringify(body) : undefined
      });
      const data = await res.json().catch(() => null);
      if (!res.ok) {
        throw data && data.message ? data : { message: 'Request failed', severity: 'error' };
      }
      return data;
    };

    const renderGoal = (goal) => `
      <div class="stat">
        <span class="label">${escapeHtml(goal.label)}</span>
        <div class="bar"><span style="width: ${Math.min(goal.percent, 100)}%"></span></div>
        <span class="hint">${fmt(goal.total, 1)} / ${fmt(goal.goal, 1)} ${escapeHtml(goal.unit)} (${fmt(goal.percent)}%)</span>
      </div>`;

    const renderChart = (el, chart) => {
      const values = chart.datasets.flatMap((set) => set.values);
      if (!chart.labels.length || !values.length) {
        el.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No data yet</text>';
        return;
      }

      const width = 600;
      const height = 260;
      const paddingX = 44;
      const paddingY = 34;
      const top = 24;
      const axes = {};
      chart.datasets.forEach((set) => {
        const id = set.style.yAxisId || 'y';
        const axis = axes[id] || { min: Infinity, max: -Infinity };
        set.values.forEach((v) => {
          axis.min = Math.min(axis.min, v);
          axis.max = Math.max(axis.max, v);
        });
        if (axis.min === axis.max) {
          axis.min -= 1;
          axis.max += 1;
        }
        axes[id] = axis;
      });

      const count = chart.labels.length;
      const xStep = count > 1 ? (width - paddingX * 2) / (count - 1) : 0;
      const x = (i) => paddingX + i * xStep;
      const y = (axis, v) => height - paddingY - ((v - axis.min) / (axis.max - axis.min)) * (height - top - paddingY);

      const left = axes.y || Object.values(axes)[0];
      let svg = '';
      for (let i = 0; i <= 4; i += 1) {
        const v = left.min + ((left.max - left.min) * i) / 4;
        const yPos = y(left, v);
        svg += `<line class="chart-grid" x1="${paddingX}" y1="${yPos}" x2="${width - paddingX}" y2="${yPos}" />`;
        svg += `<text class="chart-label" x="${paddingX - 8}" y="${yPos + 4}" text-anchor="end">${fmt(v, 1)}</text>`;
      }

      chart.datasets.forEach((set) => {
        const axis = axes[set.style.yAxisId || 'y'];
        const color = set.style.borderColor;
        const path = set.values.map((v, i) => `${i === 0 ? 'M' : 'L'} ${x(i).toFixed(2)} ${y(axis, v).toFixed(2)}`).join(' ');
        svg += `<path d="${path}" fill="none" stroke="${color}" stroke-width="3" />`;
        svg += set.values.map((v, i) => `<circle cx="${x(i)}" cy="${y(axis, v)}" r="4" fill="white" stroke="${color}" stroke-width="2" />`).join('');
      });

      const labelEvery = count > 8 ? 2 : 1;
      svg += chart.labels
        .map((label, i) => (i % labelEvery ? '' : `<text class="chart-label" x="${x(i)}" y="${height - paddingY + 18}" text-anchor="middle">${escapeHtml(label)}</text>`))
        .join('');

      el.setAttribute('viewBox', `0 0 ${width} ${height}`);
      el.innerHTML = svg;

      const legend = document.getElementById(`${el.id}-legend`);
      if (legend) {
        legend.innerHTML = chart.datasets
          .map((set) => `<span><i style="background: ${set.style.borderColor}"></i>${escapeHtml(set.label)}</span>`)
          .join('');
      }
    };

    const renderList = (el, items, describe, onDelete) => {
      el.innerHTML = items
        .map((item, index) => {
          const [primary, secondary] = describe(item);
          return `<li><span>${escapeHtml(primary)}<span class="secondary">${escapeHtml(secondary)}</span></span>
            <button class="delete" type="button" data-index="${index}">Delete</button></li>`;
        })
        .join('');
      el.querySelectorAll('button.delete').forEach((button) => {
        button.addEventListener('click', () => onDelete(Number(button.dataset.index)));
      });
    };

    const bindForm = (formId, draftFrom, onSubmit) => {
      const form = document.getElementById(formId);
      form.addEventListener('submit', (event) => {
        event.preventDefault();
        onSubmit(draftFrom(new FormData(form)))
          .then((ok) => ok && form.reset())
          .catch(showNotice);
      });
    };

{{PAGE_SCRIPT}}
  </script>
</body>
</html>
"#;

const DASHBOARD_BODY: &str = r#"    <section class="panel">
      <div class="stat">
        <span class="label">Today's Workout</span>
        <span class="value" id="workout-minutes">--</span>
        <span class="hint" id="workout-hint"></span>
      </div>
      <div id="calories-goal"></div>
      <div id="water-goal"></div>
    </section>
    <section class="card">
      <h2>Weight Progress</h2>
      <div class="legend" id="weight-chart-legend"></div>
      <svg class="chart" id="weight-chart" viewBox="0 0 600 260" role="img" aria-label="Weight chart"></svg>
    </section>"#;

const DASHBOARD_SCRIPT: &str = r#"    api('GET', '/api/dashboard')
      .then((view) => {
        document.getElementById('workout-minutes').textContent = `${fmt(view.workout_minutes)} min`;
        document.getElementById('workout-hint').textContent = `${view.exercise_count} exercises on ${view.date}`;
        document.getElementById('calories-goal').innerHTML = renderGoal(view.calories);
        document.getElementById('water-goal').innerHTML = renderGoal(view.water);
        renderChart(document.getElementById('weight-chart'), view.weight_chart);
      })
      .catch(showNotice);"#;

const WORKOUT_BODY: &str = r#"    <section class="panel">
      <div class="stat"><span class="label">Sets today</span><span class="value" id="total-sets">--</span></div>
      <div class="stat"><span class="label">Estimated time</span><span class="value" id="minutes">--</span></div>
      <div class="stat"><span class="label">Volume</span><span class="value" id="volume">--</span></div>
    </section>
    <section class="split">
      <div class="card">
        <h2>Today's Workout</h2>
        <ul class="records" id="exercises"></ul>
      </div>
      <div class="card">
        <h2>Add Exercise</h2>
        <form id="exercise-form">
          <input name="name" placeholder="Exercise Name" />
          <input name="sets" type="number" placeholder="Sets" />
          <input name="reps" type="number" placeholder="Reps" />
          <input name="weight" type="number" step="any" placeholder="Weight (kg)" />
          <button type="submit">Add Exercise</button>
        </form>
      </div>
    </section>"#;

const WORKOUT_SCRIPT: &str = r#"    const renderWorkout = (view) => {
      document.getElementById('total-sets').textContent = fmt(view.total_sets);
      document.getElementById('minutes').textContent = `${fmt(view.minutes)} min`;
      document.getElementById('volume').textContent = `${fmt(view.volume)} kg`;
      renderList(
        document.getElementById('exercises'),
        view.exercises,
        (e) => [e.name, `${e.sets} sets × ${e.reps} reps @ ${e.weight}kg`],
        (index) => api('DELETE', `/api/workouts/${index}`).then(renderWorkout).catch(showNotice)
      );
    };

    bindForm(
      'exercise-form',
      (data) => ({
        name: data.get('name') || '',
        sets: parseInt(data.get('sets'), 10) || 0,
        reps: parseInt(data.get('reps'), 10) || 0,
        weight: parseFloat(data.get('weight')) || 0
      }),
      (draft) => api('POST', '/api/workouts', draft).then((res) => {
        renderWorkout(res.view);
        showNotice(res.notice);
        return true;
      })
    );

    api('GET', '/api/workouts').then(renderWorkout).catch(showNotice);"#;

const NUTRITION_BODY: &str = r#"    <section class="card">
      <h2>Daily Progress</h2>
      <div class="panel" id="goals"></div>
    </section>
    <section class="card">
      <h2>Calories Over Time</h2>
      <div class="legend" id="calories-chart-legend"></div>
      <svg class="chart" id="calories-chart" viewBox="0 0 600 260" role="img" aria-label="Calories chart"></svg>
    </section>
    <section class="card">
      <h2>Protein / Carbs / Fat Trends</h2>
      <div class="legend" id="macros-chart-legend"></div>
      <svg class="chart" id="macros-chart" viewBox="0 0 600 260" role="img" aria-label="Macros chart"></svg>
    </section>
    <section class="split">
      <div class="card">
        <h2>Today's Meals</h2>
        <ul class="records" id="meals"></ul>
      </div>
      <div class="card">
        <h2>Add Meal</h2>
        <form id="meal-form">
          <input name="name" placeholder="Meal Name" />
          <input name="calories" type="number" placeholder="Calories" />
          <input name="protein" type="number" placeholder="Protein (g)" />
          <input name="carbs" type="number" placeholder="Carbs (g)" />
          <input name="fat" type="number" placeholder="Fat (g)" />
          <input name="water" type="number" step="any" placeholder="Water (L)" />
          <button type="submit">Add Meal</button>
        </form>
      </div>
    </section>"#;

const NUTRITION_SCRIPT: &str = r#"    const renderNutrition = (view) => {
      document.getElementById('goals').innerHTML = view.goals.map(renderGoal).join('');
      renderChart(document.getElementById('calories-chart'), view.calories_chart);
      renderChart(document.getElementById('macros-chart'), view.macros_chart);
      renderList(
        document.getElementById('meals'),
        view.meals,
        (m) => [m.name, `${m.calories} kcal | P: ${m.protein}g | C: ${m.carbs}g | F: ${m.fat}g`],
        (index) => api('DELETE', `/api/meals/${index}`).then(renderNutrition).catch(showNotice)
      );
    };

    bindForm(
      'meal-form',
      (data) => {
        const draft = {
          name: data.get('name') || '',
          calories: parseInt(data.get('calories'), 10) || 0,
          protein: parseInt(data.get('protein'), 10) || 0,
          carbs: parseInt(data.get('carbs'), 10) || 0,
          fat: parseInt(data.get('fat'), 10) || 0
        };
        const water = parseFloat(data.get('water'));
        if (!Number.isNaN(water)) {
          draft.water = water;
        }
        return draft;
      },
      (draft) => api('POST', '/api/meals', draft).then((res) => {
        renderNutrition(res.view);
        showNotice(res.notice);
        return true;
      })
    );

    api('GET', '/api/meals').then(renderNutrition).catch(showNotice);"#;

const PROGRESS_BODY: &str = r#"    <section class="panel">
      <div class="stat"><span class="label">Latest weight</span><span class="value" id="latest-weight">--</span></div>
      <div class="stat"><span class="label">Weight change</span><span class="value" id="weight-change">--</span></div>
      <div class="stat"><span class="label">Body fat change</span><span class="value" id="fat-change">--</span></div>
    </section>
    <section class="card">
      <h2>Weight &amp; Body Fat Over Time</h2>
      <div class="legend" id="progress-chart-legend"></div>
      <svg class="chart" id="progress-chart" viewBox="0 0 600 260" role="img" aria-label="Progress chart"></svg>
    </section>
    <section class="split">
      <div class="card">
        <h2>Entry History</h2>
        <ul class="records" id="entries"></ul>
      </div>
      <div class="card">
        <h2>Add Progress Entry</h2>
        <form id="progress-form">
          <input name="date" type="date" />
          <input name="weight" type="number" step="any" placeholder="Weight (kg)" />
          <input name="bodyFat" type="number" step="any" placeholder="Body Fat %" />
          <textarea name="notes" rows="2" placeholder="Notes"></textarea>
          <button type="submit">Add Entry</button>
        </form>
      </div>
    </section>"#;

const PROGRESS_SCRIPT: &str = r#"    const signed = (value, unit) => `${value > 0 ? '+' : ''}${fmt(value, 1)}${unit}`;

    const renderProgress = (view) => {
      document.getElementById('latest-weight').textContent = view.latest ? `${fmt(view.latest.weight, 1)} kg` : '--';
      document.getElementById('weight-change').textContent = signed(view.weight_change, ' kg');
      document.getElementById('fat-change').textContent = signed(view.body_fat_change, '%');
      renderChart(document.getElementById('progress-chart'), view.chart);
      renderList(
        document.getElementById('entries'),
        view.entries,
        (e) => [`${e.date} - Weight: ${e.weight}kg, Body Fat: ${e.bodyFat}%`, e.notes],
        (index) => api('DELETE', `/api/progress/${index}`).then(renderProgress).catch(showNotice)
      );
    };

    bindForm(
      'progress-form',
      (data) => ({
        date: data.get('date') || '',
        weight: parseFloat(data.get('weight')) || 0,
        bodyFat: parseFloat(data.get('bodyFat')) || 0,
        notes: data.get('notes') || ''
      }),
      (draft) => api('POST', '/api/progress', draft).then((res) => {
        renderProgress(res.view);
        showNotice(res.notice);
        return true;
      })
    );

    api('GET', '/api/progress').then(renderProgress).catch(showNotice);"#;
