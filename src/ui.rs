pub fn render_dashboard(user: &str, total: u64, next_target: u64) -> String {
    DASHBOARD_HTML
        .replace("{{USER}}", user)
        .replace("{{TOTAL}}", &total.to_string())
        .replace("{{TARGET}}", &next_target.to_string())
}

pub const LOGIN_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>EcoTrack - Login</title>
  <style>
    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, #e8f5e9, #c8e6c9 60%, #f1f8e9 100%);
      color: #1b3a2a;
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
    }
    .card {
      background: rgba(255, 255, 255, 0.92);
      border-radius: 24px;
      box-shadow: 0 24px 60px rgba(27, 58, 42, 0.18);
      padding: 36px;
      width: min(380px, 90vw);
      display: grid;
      gap: 18px;
    }
    h1 { margin: 0; font-size: 1.8rem; }
    p { margin: 0; color: #4e6e5c; }
    input {
      border: 1px solid rgba(27, 58, 42, 0.25);
      border-radius: 12px;
      padding: 12px 14px;
      font-size: 1rem;
    }
    button {
      border: none;
      border-radius: 999px;
      padding: 14px;
      font-size: 1rem;
      font-weight: 600;
      background: #2e7d32;
      color: white;
      cursor: pointer;
    }
  </style>
</head>
<body>
  <form class="card" method="post" action="/login">
    <h1>EcoTrack</h1>
    <p>Who is tracking today?</p>
    <input name="username" placeholder="Your name" autofocus required />
    <button type="submit">Start tracking</button>
  </form>
</body>
</html>
"#;

const DASHBOARD_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>EcoTrack</title>
  <style>
    :root {
      --bg-1: #e8f5e9;
      --bg-2: #c8e6c9;
      --ink: #1b3a2a;
      --accent: #2e7d32;
      --accent-2: #00695c;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 24px 60px rgba(27, 58, 42, 0.18);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f1f8e9 60%, #e8f5e9 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header h1 { margin: 0; font-size: 2.2rem; }
    header .subtitle { margin: 4px 0 0; color: #4e6e5c; }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(27, 58, 42, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #6e8a7b;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    form.log {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 12px;
      align-items: end;
    }

    form.log label { display: grid; gap: 6px; font-size: 0.9rem; }

    input {
      border: 1px solid rgba(27, 58, 42, 0.25);
      border-radius: 12px;
      padding: 10px 12px;
      font-size: 1rem;
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 14px 18px;
      font-size: 1rem;
      font-weight: 600;
      background: var(--accent);
      color: white;
      cursor: pointer;
    }

    ul.activity-list { margin: 0; padding-left: 20px; display: grid; gap: 8px; }

    .reward-earned {
      background: white;
      border-radius: 14px;
      border: 1px solid rgba(27, 58, 42, 0.12);
      padding: 12px 16px;
      margin-bottom: 10px;
    }
    .reward-earned p { margin: 6px 0 0; color: #4e6e5c; }

    .toast {
      position: fixed;
      left: 50%;
      transform: translateX(-50%);
      bottom: 40px;
      padding: 12px 22px;
      background: rgba(0, 0, 0, 0.85);
      color: white;
      border-radius: 20px;
      font-size: 16px;
      opacity: 0;
      transition: 0.3s;
      z-index: 30;
      pointer-events: none;
    }

    .popup {
      position: fixed;
      inset: 0;
      display: none;
      align-items: center;
      justify-content: center;
      background: rgba(27, 58, 42, 0.45);
      z-index: 20;
    }
    .popup .inner {
      background: white;
      border-radius: 22px;
      padding: 32px;
      width: min(420px, 90vw);
      text-align: center;
      display: grid;
      gap: 14px;
    }

    #confetti {
      position: fixed;
      inset: 0;
      pointer-events: none;
      z-index: 10;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>EcoTrack</h1>
      <p class="subtitle">Hello {{USER}} - log eco-friendly activities and earn rewards.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Current score</span>
        <span id="current-score" class="value">{{TOTAL}} pts</span>
      </div>
      <div class="stat">
        <span class="label">Next target</span>
        <span id="target-score" class="value">{{TARGET}} pts</span>
      </div>
    </section>

    <section>
      <h2>Log an activity</h2>
      <form id="activity-form" class="log">
        <label>Title
          <input id="title" placeholder="Plant a tree" />
        </label>
        <label>Category
          <input id="category" placeholder="Gardening" />
        </label>
        <label>Date
          <input id="date" type="date" />
        </label>
        <label>Photo
          <input id="photo" type="file" accept="image/*" />
        </label>
        <button type="submit">Add activity</button>
      </form>
    </section>

    <section>
      <h2>Recent activities</h2>
      <ul id="activity-list" class="activity-list"></ul>
    </section>

    <section>
      <h2>Rewards</h2>
      <div id="reward-box"></div>
    </section>
  </main>

  <div id="toast" class="toast"></div>

  <div id="reward-popup" class="popup">
    <div class="inner">
      <h2 id="reward-title">Congratulations!</h2>
      <p id="reward-text"></p>
      <button id="reward-close" type="button">Keep going</button>
    </div>
  </div>

  <canvas id="confetti"></canvas>

  <script>
    const scoreEl = document.getElementById('current-score');
    const targetEl = document.getElementById('target-score');
    const listEl = document.getElementById('activity-list');
    const rewardBoxEl = document.getElementById('reward-box');
    const toastEl = document.getElementById('toast');
    const popupEl = document.getElementById('reward-popup');
    const rewardTextEl = document.getElementById('reward-text');
    const form = document.getElementById('activity-form');

    let toastTimer = null;
    const showToast = (msg) => {
      toastEl.textContent = msg;
      toastEl.style.opacity = '1';
      toastEl.style.bottom = '60px';
      clearTimeout(toastTimer);
      toastTimer = setTimeout(() => {
        toastEl.style.opacity = '0';
        toastEl.style.bottom = '40px';
      }, 2000);
    };

    const escapeHtml = (text) =>
      text.replace(/[&<>"]/g, (ch) => ({ '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;' }[ch]));

    const renderDashboard = (view) => {
      scoreEl.textContent = `${view.total} pts`;
      targetEl.textContent = `${view.next_target} pts`;

      listEl.innerHTML = view.recent
        .map((a) =>
          `<li><strong>${escapeHtml(a.title)}</strong> - ${a.points} pts (${a.date})${a.has_image ? ' [photo]' : ''}</li>`)
        .join('');

      if (view.rewards.length === 0) {
        rewardBoxEl.innerHTML = '<p>No rewards yet. Keep earning points!</p>';
        return;
      }
      rewardBoxEl.innerHTML = view.rewards
        .map((r) =>
          `<div class="reward-earned"><strong>${escapeHtml(r.name)}</strong><p>${escapeHtml(r.description)}</p></div>`)
        .join('');
    };

    const loadDashboard = async () => {
      const res = await fetch('/api/dashboard');
      if (res.status === 401) {
        window.location.href = '/login';
        return;
      }
      if (!res.ok) {
        throw new Error('Unable to load dashboard');
      }
      renderDashboard(await res.json());
    };

    const showRewardPopup = (milestone) => {
      rewardTextEl.textContent =
        `You reached ${milestone.tier} points! Reward unlocked: ${milestone.reward}. ${milestone.description}`;
      popupEl.style.display = 'flex';
    };

    document.getElementById('reward-close').addEventListener('click', () => {
      popupEl.style.display = 'none';
    });

    // Decorative only: runs for 10 seconds, then cleans itself up.
    const startConfetti = () => {
      const canvas = document.getElementById('confetti');
      const ctx = canvas.getContext('2d');
      canvas.width = window.innerWidth;
      canvas.height = window.innerHeight;

      const colors = ['#ff4d4d', '#ffcc00', '#33cc33', '#3399ff', '#ff66cc'];
      const pieces = Array.from({ length: 200 }, () => ({
        x: Math.random() * canvas.width,
        y: Math.random() * -canvas.height,
        size: 6 + Math.random() * 6,
        color: colors[Math.floor(Math.random() * colors.length)],
        speed: 2 + Math.random() * 4
      }));

      let frame = null;
      const animate = () => {
        ctx.clearRect(0, 0, canvas.width, canvas.height);
        pieces.forEach((p) => {
          p.y += p.speed;
          if (p.y > canvas.height) p.y = -10;
          ctx.fillStyle = p.color;
          ctx.fillRect(p.x, p.y, p.size, p.size);
        });
        frame = requestAnimationFrame(animate);
      };
      animate();

      setTimeout(() => {
        cancelAnimationFrame(frame);
        ctx.clearRect(0, 0, canvas.width, canvas.height);
      }, 10000);
    };

    form.addEventListener('submit', async (event) => {
      event.preventDefault();

      const payload = {
        title: document.getElementById('title').value,
        category: document.getElementById('category').value,
        date: document.getElementById('date').value,
        has_image: document.getElementById('photo').files.length > 0
      };

      const res = await fetch('/api/activities', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(payload)
      });

      if (!res.ok) {
        showToast(await res.text() || 'Submission failed');
        return;
      }

      const result = await res.json();
      showToast(`You gained ${result.points} points!`);
      if (result.milestone) {
        showRewardPopup(result.milestone);
        startConfetti();
      }
      form.reset();
      loadDashboard().catch((err) => showToast(err.message));
    });

    loadDashboard().catch((err) => showToast(err.message));
  </script>
</body>
</html>
"#;
